// Distance calculation utilities

use crate::models::{Km, Location};

/// Earth radius used by the haversine formula, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two locations (haversine).
///
/// Coordinates are not range-checked; non-finite input yields NaN.
pub fn haversine_distance(p1: &Location, p2: &Location) -> Km {
    haversine_km(p1.lat, p1.lng, p2.lat, p2.lng)
}

/// Haversine distance on raw degree coordinates
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Km {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push the chord term a hair past 1 for antipodal points
    let half_chord = half_chord.clamp(0.0, 1.0);

    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * angle
}
