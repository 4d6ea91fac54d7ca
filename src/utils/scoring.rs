// Priority scoring for collection points

use crate::models::{CollectionPoint, Km};

/// Weight of each fill-level percentage point
pub const FILL_WEIGHT: f64 = 0.6;

/// Weight of each odor-index step
pub const ODOR_WEIGHT: f64 = 4.0;

/// Score multiplier for Critical bins
pub const CRITICAL_MULTIPLIER: f64 = 1.5;

/// Score multiplier for Elevated bins
pub const ELEVATED_MULTIPLIER: f64 = 1.2;

/// Bins strictly above this fill level are collected regardless of state
pub const ELIGIBLE_FILL_THRESHOLD: i32 = 50;

/// Added to the leg distance when weighing a candidate, keeps the
/// denominator positive for bins at the current position
pub const DISTANCE_DAMPING_KM: Km = 0.5;

/// Urgency score of a point, only meaningful relative to other points.
///
/// The state multiplier is applied after the weighted terms are summed.
pub fn priority_score(point: &CollectionPoint) -> f64 {
    let base = f64::from(point.fill_level) * FILL_WEIGHT + f64::from(point.odor_index) * ODOR_WEIGHT;
    base * point.urgency_state.multiplier()
}

/// Desirability of driving `distance` km to a bin with `priority`
pub fn composite_score(priority: f64, distance: Km) -> f64 {
    priority / (distance + DISTANCE_DAMPING_KM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, UrgencyState};

    fn point(fill_level: i32, odor_index: i32, urgency_state: UrgencyState) -> CollectionPoint {
        CollectionPoint::new("BIN-001", Location::new(0.0, 0.0), fill_level, odor_index, urgency_state)
    }

    #[test]
    fn test_normal_priority() {
        // 80 * 0.6 + 5 * 4 = 68
        let score = priority_score(&point(80, 5, UrgencyState::Normal));
        assert!((score - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_state_multipliers() {
        let elevated = priority_score(&point(80, 5, UrgencyState::Elevated));
        let critical = priority_score(&point(80, 5, UrgencyState::Critical));

        assert!((elevated - 68.0 * 1.2).abs() < 1e-9);
        assert!((critical - 102.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_in_fill_and_odor() {
        let low = priority_score(&point(60, 4, UrgencyState::Normal));
        assert!(priority_score(&point(61, 4, UrgencyState::Normal)) > low);
        assert!(priority_score(&point(60, 5, UrgencyState::Normal)) > low);
    }

    #[test]
    fn test_out_of_range_values_are_not_clamped() {
        let score = priority_score(&point(150, 20, UrgencyState::Normal));
        assert!((score - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_composite_score() {
        assert_eq!(composite_score(10.0, 0.0), 20.0);
        assert_eq!(composite_score(10.0, 1.5), 5.0);
        assert!(composite_score(10.0, 1.0) > composite_score(10.0, 2.0));
    }
}
