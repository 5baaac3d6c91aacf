use crate::core::distance::DistanceFilter;
use crate::core::records::parse_records;
use crate::core::report;
use crate::core::{CitySource, ConfigProvider, FilterResult, Pipeline};
use crate::utils::error::Result;

/// Fetch, filter by distance, render.
pub struct CityPipeline<S: CitySource, C: ConfigProvider> {
    source: S,
    config: C,
    filter: DistanceFilter,
}

impl<S: CitySource, C: ConfigProvider> CityPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        let filter = DistanceFilter::new(config.reference());
        Self {
            source,
            config,
            filter,
        }
    }
}

#[async_trait::async_trait]
impl<S: CitySource, C: ConfigProvider> Pipeline for CityPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Fetching cities from: {}", self.source.describe());
        self.source.fetch().await
    }

    async fn transform(&self, raw: String) -> Result<FilterResult> {
        let records = parse_records(&raw)?;
        let radius_km = self.config.radius_km();

        tracing::debug!(
            "Filtering {} records within {}km of {}",
            records.len(),
            radius_km,
            self.filter.reference().name
        );
        let cities = self.filter.filter_within_radius(&records, radius_km);

        Ok(FilterResult::new(
            self.filter.reference().clone(),
            radius_km,
            cities,
        ))
    }

    async fn load(&self, result: FilterResult) -> Result<String> {
        report::render(&result, self.config.output_format())
    }
}
