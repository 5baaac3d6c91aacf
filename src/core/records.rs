use crate::domain::model::CityRecord;
use crate::utils::error::{GeoError, Result};
use std::collections::BTreeMap;

/// Decodes a cities document: a JSON object whose values are city records.
///
/// The keys are ignored. Any syntax error, a non-object top level or a record
/// without `city`, `lat` and `lon` fails the whole document.
pub fn parse_records(raw: &str) -> Result<Vec<CityRecord>> {
    let keyed: BTreeMap<String, CityRecord> = serde_json::from_str(raw).map_err(|e| {
        tracing::warn!("Failed to decode JSON data in input: {}", e);
        GeoError::parse(e.to_string())
    })?;

    tracing::debug!("Decoded {} city records", keyed.len());
    Ok(keyed.into_values().collect())
}
