use crate::config::{validate_settings, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::domain::model::{
    OutputFormat, ReferencePoint, DEFAULT_RADIUS_KM, DUBLIN_LAT, DUBLIN_LON,
};
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// File-based configuration. Every section and key is optional.
///
/// ```toml
/// [source]
/// location = "https://example.com/cities.json"
/// timeout_seconds = 30
///
/// [reference]
/// name = "Dublin"
/// lat = 53.333
/// lon = -6.267
///
/// [filter]
/// radius_km = 500.0
///
/// [output]
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub reference: ReferenceConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub location: String,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_SOURCE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Without `name`, the point is named by its coordinates unless it is Dublin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceConfig {
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            name: None,
            lat: DUBLIN_LAT,
            lon: DUBLIN_LON,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub radius_km: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GeoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| GeoError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.location
    }

    fn reference(&self) -> ReferencePoint {
        ReferencePoint::resolve(
            self.reference.name.clone(),
            self.reference.lat,
            self.reference.lon,
        )
    }

    fn radius_km(&self) -> f64 {
        self.filter.radius_km
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(
            &self.source.location,
            &self.reference(),
            self.filter.radius_km,
            self.source.timeout_seconds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.source(), DEFAULT_SOURCE_URL);
        assert_eq!(config.reference(), ReferencePoint::new("Dublin", DUBLIN_LAT, DUBLIN_LON));
        assert_eq!(config.radius_km(), 500.0);
        assert_eq!(config.timeout_seconds(), 30);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
location = "./cities.json"
timeout_seconds = 5

[reference]
name = "Aberdeen"
lat = 57.15
lon = -2.1

[filter]
radius_km = 250.5

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source(), "./cities.json");
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.reference(), ReferencePoint::new("Aberdeen", 57.15, -2.1));
        assert_eq!(config.radius_km(), 250.5);
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GEODISTANCE_TEST_SOURCE", "https://test.api.com/cities.json");

        let toml_content = r#"
[source]
location = "${GEODISTANCE_TEST_SOURCE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source(), "https://test.api.com/cities.json");

        std::env::remove_var("GEODISTANCE_TEST_SOURCE");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[reference]
name = "${GEODISTANCE_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.reference().name, "${GEODISTANCE_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_reference_without_name_is_not_called_dublin() {
        let config = TomlConfig::from_toml_str("[reference]\nlat = 57.15\nlon = -2.1\n").unwrap();
        assert_eq!(config.reference(), ReferencePoint::new("(57.15, -2.1)", 57.15, -2.1));

        let config = TomlConfig::from_toml_str("[reference]\nname = \"Aberdeen\"\nlat = 57.15\nlon = -2.1\n").unwrap();
        assert_eq!(config.reference().name, "Aberdeen");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[filter]\nradius_km = -1.0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[reference]\nlon = 200.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[filter]\nradius_km = \"far\"\n").unwrap_err();
        assert!(matches!(err, GeoError::ConfigError { .. }));

        let err = TomlConfig::from_toml_str("[filter]\nradius = 5.0\n").unwrap_err();
        assert!(matches!(err, GeoError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[reference]\nname = \"Leeds\"\nlat = 53.8\nlon = -1.55\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.reference().name, "Leeds");
        assert_eq!(config.radius_km(), 500.0);
    }
}
