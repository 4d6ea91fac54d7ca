// Completion time estimation

use crate::models::{Km, Minutes};

/// Assumed average urban driving speed
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Time spent emptying one bin
pub const DWELL_MINUTES_PER_BIN: f64 = 2.0;

/// Minutes needed to drive `distance_km` at the average urban speed
pub fn driving_minutes(distance_km: Km) -> f64 {
    (distance_km / AVERAGE_SPEED_KMH) * 60.0
}

/// Minutes spent at the bins themselves
pub fn collection_minutes(visited: usize) -> f64 {
    visited as f64 * DWELL_MINUTES_PER_BIN
}

/// Driving plus dwell time, rounded up to whole minutes.
///
/// Negative or NaN totals saturate to zero.
pub fn estimate_minutes(distance_km: Km, visited: usize) -> Minutes {
    let total = driving_minutes(distance_km) + collection_minutes(visited);
    // `as` saturates: NaN and negatives become 0
    total.ceil() as Minutes
}
