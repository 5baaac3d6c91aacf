use serde::{Deserialize, Serialize};

/// Mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_RADIUS_KM: f64 = 500.0;

pub const DUBLIN_LAT: f64 = 53.333;
pub const DUBLIN_LON: f64 = -6.267;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One entry of the cities document: `{"city": ..., "lat": ..., "lon": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    #[serde(rename = "city")]
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// The point distances are measured from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl ReferencePoint {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Without an explicit name the point is called "Dublin" only when it sits
    /// on Dublin's coordinates; any other point is named by its coordinates.
    pub fn resolve(name: Option<String>, latitude: f64, longitude: f64) -> Self {
        let name = name.unwrap_or_else(|| {
            if latitude == DUBLIN_LAT && longitude == DUBLIN_LON {
                "Dublin".to_string()
            } else {
                format!("({}, {})", latitude, longitude)
            }
        });
        Self::new(name, latitude, longitude)
    }

    pub fn dublin() -> Self {
        Self::new("Dublin", DUBLIN_LAT, DUBLIN_LON)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::dublin()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    pub reference: ReferencePoint,
    pub radius_km: f64,
    pub cities: Vec<String>,
    pub total: usize,
}

impl FilterResult {
    pub fn new(reference: ReferencePoint, radius_km: f64, cities: Vec<String>) -> Self {
        let total = cities.len();
        Self {
            reference,
            radius_km,
            cities,
            total,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
