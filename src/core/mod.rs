pub mod distance;
pub mod etl;
pub mod pipeline;
pub mod records;
pub mod report;

pub use crate::domain::model::{CityRecord, FilterResult, OutputFormat, ReferencePoint};
pub use crate::domain::ports::{CitySource, ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
