pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DataSource, FileSource, HttpSource};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    distance::{haversine_km, DistanceFilter},
    etl::{run, GeoEngine},
    pipeline::CityPipeline,
    records::parse_records,
};
pub use domain::model::{CityRecord, Coordinate, FilterResult, OutputFormat, ReferencePoint};
pub use utils::error::{GeoError, Result};
