// Location model representing geographic coordinates

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::utils::distance::haversine_distance;

/// Latitude of the default depot (municipal reference point)
pub const DEFAULT_DEPOT_LAT: f64 = 26.9124;

/// Longitude of the default depot (municipal reference point)
pub const DEFAULT_DEPOT_LNG: f64 = 75.7873;

/// Represents a location as a latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The fixed depot every route starts from when the caller supplies none
    pub fn default_depot() -> Self {
        Self::new(DEFAULT_DEPOT_LAT, DEFAULT_DEPOT_LNG)
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_distance(self, other)
    }

    /// True when both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        // geo points are (x, y) = (longitude, latitude)
        Point::new(location.lng, location.lat)
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Location::new(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let loc = Location::new(26.9124, 75.7873);
        assert_eq!(loc.distance_to(&loc), 0.0);
    }

    #[test]
    fn test_point_conversion() {
        let loc = Location::new(52.37, 4.89);
        let point: Point<f64> = loc.into();

        assert_eq!(point.x(), 4.89);
        assert_eq!(point.y(), 52.37);
        assert_eq!(Location::from(point), loc);
    }

    #[test]
    fn test_is_finite() {
        assert!(Location::default_depot().is_finite());
        assert!(!Location::new(f64::NAN, 0.0).is_finite());
        assert!(!Location::new(0.0, f64::NEG_INFINITY).is_finite());
    }
}
