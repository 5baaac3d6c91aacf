use crate::utils::error::{GeoError, Result};
use std::path::PathBuf;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Where a source location points once classified.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceLocation {
    Remote(Url),
    Local(PathBuf),
}

/// Classifies a source: http(s) URLs are remote, `file://` URLs and plain
/// paths are local, any other URL scheme is rejected.
pub fn validate_source(field_name: &str, location: &str) -> Result<SourceLocation> {
    if location.trim().is_empty() {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: location.to_string(),
            reason: "Source cannot be empty".to_string(),
        });
    }

    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(_) => {
            validate_path(field_name, location)?;
            return Ok(SourceLocation::Local(PathBuf::from(location)));
        }
    };

    match url.scheme() {
        "http" | "https" => Ok(SourceLocation::Remote(url)),
        "file" => url
            .to_file_path()
            .map(SourceLocation::Local)
            .map_err(|_| GeoError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: location.to_string(),
                reason: "file URL does not name a local path".to_string(),
            }),
        // Windows drive letters parse as a one-letter scheme
        scheme if scheme.len() == 1 => {
            validate_path(field_name, location)?;
            Ok(SourceLocation::Local(PathBuf::from(location)))
        }
        scheme => Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: location.to_string(),
            reason: format!("Unsupported URL scheme: {}", scheme),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number of at least 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    // written so that NaN fails too
    if !(value >= min && value <= max) {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
