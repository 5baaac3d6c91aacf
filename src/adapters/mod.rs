// Adapters layer: concrete city sources (http, local file).

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::domain::ports::CitySource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_source, SourceLocation};
use std::time::Duration;

/// A city source chosen at runtime from a location string.
#[derive(Debug, Clone)]
pub enum DataSource {
    Remote(HttpSource),
    Local(FileSource),
}

impl DataSource {
    /// `http`/`https` URLs are fetched, `file://` URLs and bare paths are read from disk.
    pub fn from_location(location: &str, timeout: Duration) -> Result<Self> {
        match validate_source("source", location)? {
            SourceLocation::Remote(url) => Ok(Self::Remote(HttpSource::new(url, timeout)?)),
            SourceLocation::Local(path) => Ok(Self::Local(FileSource::new(path))),
        }
    }
}

impl CitySource for DataSource {
    async fn fetch(&self) -> Result<String> {
        match self {
            Self::Remote(source) => source.fetch().await,
            Self::Local(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Remote(source) => source.describe(),
            Self::Local(source) => source.describe(),
        }
    }
}
