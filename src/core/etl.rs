use crate::adapters::DataSource;
use crate::core::pipeline::CityPipeline;
use crate::core::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;

/// Drives a pipeline through extract, transform and load in order.
pub struct GeoEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeoEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Extracting city data...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} bytes", raw_data.len());

        tracing::info!("Filtering cities...");
        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "{} cities within {}km of {}",
            result.total(),
            result.radius_km,
            result.reference.name
        );

        let report = self.pipeline.load(result).await?;
        Ok(report)
    }
}

/// Validates `config`, builds its source and runs the whole pipeline once.
pub async fn run<C: ConfigProvider + Validate>(config: C) -> Result<String> {
    config.validate()?;

    let timeout = Duration::from_secs(config.timeout_seconds());
    let source = DataSource::from_location(config.source(), timeout)?;
    let pipeline = CityPipeline::new(source, config);

    GeoEngine::new(pipeline).run().await
}
