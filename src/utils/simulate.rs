// Seeded synthetic bin fleets for demos and benchmarks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CollectionPoint, Location, UrgencyState};

/// Half-width of the square, in degrees, that bins are scattered over
pub const SCATTER_DEGREES: f64 = 0.075;

/// Generates `count` bins around `center`, reproducible for a given seed.
///
/// The first 5 bins are nearly full, the next 7 are filling up and the
/// rest are in normal operation, mirroring a typical dashboard snapshot.
pub fn simulate_fleet(center: Location, count: usize, seed: u64) -> Vec<CollectionPoint> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let fill_level = if i < 5 {
                rng.gen_range(85..100)
            } else if i < 12 {
                rng.gen_range(60..80)
            } else {
                rng.gen_range(20..60)
            };

            let odor_index = if fill_level > 80 {
                rng.gen_range(7..10)
            } else if fill_level > 60 {
                rng.gen_range(4..7)
            } else {
                rng.gen_range(1..4)
            };

            let urgency_state = if fill_level > 85 {
                UrgencyState::Critical
            } else if fill_level > 60 {
                UrgencyState::Elevated
            } else {
                UrgencyState::Normal
            };

            let location = Location::new(
                center.lat + rng.gen_range(-SCATTER_DEGREES..SCATTER_DEGREES),
                center.lng + rng.gen_range(-SCATTER_DEGREES..SCATTER_DEGREES),
            );

            CollectionPoint::new(
                format!("BIN-{:03}", i + 1),
                location,
                fill_level,
                odor_index,
                urgency_state,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_fleet() {
        let center = Location::default_depot();
        assert_eq!(simulate_fleet(center, 45, 7), simulate_fleet(center, 45, 7));
    }

    #[test]
    fn test_fleet_shape() {
        let center = Location::default_depot();
        let fleet = simulate_fleet(center, 45, 42);

        assert_eq!(fleet.len(), 45);
        assert_eq!(fleet[0].id, "BIN-001");
        assert_eq!(fleet[44].id, "BIN-045");

        for point in &fleet[..5] {
            assert!((85..100).contains(&point.fill_level));
            assert!((7..10).contains(&point.odor_index));
        }
        for point in &fleet[5..12] {
            assert!((60..80).contains(&point.fill_level));
            assert!(point.needs_collection());
        }
        for point in &fleet[12..] {
            assert!((20..60).contains(&point.fill_level));
            assert_eq!(point.urgency_state, UrgencyState::Normal);
        }
        for point in &fleet {
            assert!((point.location.lat - center.lat).abs() <= SCATTER_DEGREES);
            assert!((point.location.lng - center.lng).abs() <= SCATTER_DEGREES);
        }
    }
}
