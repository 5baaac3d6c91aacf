pub mod toml_config;

use crate::domain::model::ReferencePoint;
use crate::utils::error::Result;
use crate::utils::validation;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, DEFAULT_RADIUS_KM, DUBLIN_LAT, DUBLIN_LON};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_URL: &str = "https://gist.githubusercontent.com/mwtorkowski/16ca26a0c072ef743734/raw/2aa20e8de9f2292d58a4856602c1f0634d8611a7/cities.json";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Checks shared by every configuration front end.
pub(crate) fn validate_settings(
    source: &str,
    reference: &ReferencePoint,
    radius_km: f64,
    timeout_seconds: u64,
) -> Result<()> {
    validation::validate_source("source", source)?;
    validation::validate_non_empty_string("reference.name", &reference.name)?;
    validation::validate_range("reference.lat", reference.latitude, -90.0, 90.0)?;
    validation::validate_range("reference.lon", reference.longitude, -180.0, 180.0)?;
    validation::validate_non_negative("radius_km", radius_km)?;
    validation::validate_positive_number("timeout_seconds", timeout_seconds, 1)?;
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "geodistance")]
#[command(about = "List the cities within a great-circle radius of a reference point")]
pub struct CliConfig {
    /// Cities document: an http(s) URL or a local file
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub source: String,

    #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
    pub radius_km: f64,

    /// Defaults to "Dublin" on Dublin's coordinates, otherwise to the coordinates
    #[arg(long)]
    pub reference_name: Option<String>,

    #[arg(long, default_value_t = DUBLIN_LAT, allow_negative_numbers = true)]
    pub reference_lat: f64,

    #[arg(long, default_value_t = DUBLIN_LON, allow_negative_numbers = true)]
    pub reference_lon: f64,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML configuration file; replaces the value flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.source
    }

    fn reference(&self) -> ReferencePoint {
        ReferencePoint::resolve(
            self.reference_name.clone(),
            self.reference_lat,
            self.reference_lon,
        )
    }

    fn radius_km(&self) -> f64 {
        self.radius_km
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(
            &self.source,
            &self.reference(),
            self.radius_km,
            self.timeout_seconds,
        )
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_dublin_500km() {
        let config = CliConfig::parse_from(["geodistance"]);

        assert_eq!(config.source(), DEFAULT_SOURCE_URL);
        assert_eq!(config.reference(), ReferencePoint::dublin());
        assert_eq!(config.radius_km(), 500.0);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "geodistance",
            "--source",
            "tests/fixtures/cities-sample.json",
            "--radius-km",
            "320",
            "--reference-name",
            "Buenos Aires",
            "--reference-lat",
            "-34.583",
            "--reference-lon",
            "-58.367",
            "--format",
            "json",
        ]);

        assert_eq!(config.radius_km(), 320.0);
        assert_eq!(
            config.reference(),
            ReferencePoint::new("Buenos Aires", -34.583, -58.367)
        );
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_coordinates_without_name_are_not_called_dublin() {
        let config = CliConfig::parse_from([
            "geodistance",
            "--reference-lat",
            "57.15",
            "--reference-lon",
            "-2.1",
        ]);

        assert_eq!(
            config.reference(),
            ReferencePoint::new("(57.15, -2.1)", 57.15, -2.1)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = CliConfig::parse_from(["geodistance", "--radius-km=-5"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["geodistance", "--reference-lat", "91"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["geodistance", "--reference-name", " "]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["geodistance", "--timeout-seconds", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["geodistance", "--source", "ftp://example.com/c.json"]);
        assert!(config.validate().is_err());
    }
}
