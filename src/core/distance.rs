//! Great-circle distance and radius filtering.
//!
//! Distances use the haversine formula on a spherical Earth of radius
//! [`EARTH_RADIUS_KM`]. See <https://en.wikipedia.org/wiki/Great-circle_distance>.

use crate::domain::model::{CityRecord, Coordinate, ReferencePoint, EARTH_RADIUS_KM};

/// Great-circle distance in kilometres between two points given in degrees.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = to.longitude.to_radians() - from.longitude.to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Measures and filters cities against a fixed reference point.
#[derive(Debug, Clone)]
pub struct DistanceFilter {
    reference: ReferencePoint,
}

impl DistanceFilter {
    pub fn new(reference: ReferencePoint) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferencePoint {
        &self.reference
    }

    /// Distance in kilometres from `(lat, lon)` to the reference point.
    pub fn calculate_distance(&self, lat: f64, lon: f64) -> f64 {
        haversine_km(Coordinate::new(lat, lon), self.reference.coordinate())
    }

    pub fn is_within(&self, record: &CityRecord, radius_km: f64) -> bool {
        let distance = self.calculate_distance(record.latitude, record.longitude);
        tracing::trace!("{} is {:.3}km from {}", record.name, distance, self.reference.name);
        distance <= radius_km
    }

    /// Names of the records within `radius_km` (inclusive), sorted ascending.
    ///
    /// Ordering is byte-wise, so upper-case names sort before lower-case ones.
    /// Duplicate names in the input are kept.
    pub fn filter_within_radius(&self, records: &[CityRecord], radius_km: f64) -> Vec<String> {
        let mut names: Vec<String> = records
            .iter()
            .filter(|record| self.is_within(record, radius_km))
            .map(|record| record.name.clone())
            .collect();

        names.sort();
        names
    }
}

impl Default for DistanceFilter {
    fn default() -> Self {
        Self::new(ReferencePoint::dublin())
    }
}
