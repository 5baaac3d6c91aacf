use crate::domain::model::{FilterResult, OutputFormat, ReferencePoint};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the raw cities document comes from.
pub trait CitySource: Send + Sync {
    fn fetch(&self) -> impl std::future::Future<Output = Result<String>> + Send;
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &str;
    fn reference(&self) -> ReferencePoint;
    fn radius_km(&self) -> f64;
    fn timeout_seconds(&self) -> u64;
    fn output_format(&self) -> OutputFormat;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, raw: String) -> Result<FilterResult>;
    async fn load(&self, result: FilterResult) -> Result<String>;
}
