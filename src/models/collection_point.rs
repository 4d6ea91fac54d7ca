// Collection point model representing one sensor-equipped bin

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{BinId, Location};
use crate::utils::scoring::{self, ELIGIBLE_FILL_THRESHOLD};

/// Categorical severity reported by a bin's sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyState {
    /// Operating normally (feeds report this as `online`)
    #[default]
    #[serde(alias = "online")]
    Normal,

    /// Approaching capacity (feeds report this as `warning`)
    #[serde(alias = "warning")]
    Elevated,

    /// Needs immediate attention
    Critical,
}

impl UrgencyState {
    /// Multiplier applied to a point's base priority score
    pub fn multiplier(self) -> f64 {
        match self {
            UrgencyState::Critical => scoring::CRITICAL_MULTIPLIER,
            UrgencyState::Elevated => scoring::ELEVATED_MULTIPLIER,
            UrgencyState::Normal => 1.0,
        }
    }

    /// Critical and Elevated bins are always collected, regardless of fill
    pub fn forces_collection(self) -> bool {
        matches!(self, UrgencyState::Critical | UrgencyState::Elevated)
    }
}

impl fmt::Display for UrgencyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UrgencyState::Normal => "normal",
            UrgencyState::Elevated => "elevated",
            UrgencyState::Critical => "critical",
        };
        f.pad(name)
    }
}

/// A geolocated bin with its current sensor readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPoint {
    /// Unique identifier, stable across calls
    pub id: BinId,

    /// Where the bin stands
    pub location: Location,

    /// Fill percentage, nominally 0..=100 (not clamped)
    pub fill_level: i32,

    /// Odor reading, nominally 0..=10 (not clamped)
    pub odor_index: i32,

    /// Sensor-reported severity
    #[serde(default)]
    pub urgency_state: UrgencyState,
}

impl CollectionPoint {
    /// Creates a new collection point
    pub fn new<S: Into<BinId>>(
        id: S,
        location: Location,
        fill_level: i32,
        odor_index: i32,
        urgency_state: UrgencyState,
    ) -> Self {
        Self {
            id: id.into(),
            location,
            fill_level,
            odor_index,
            urgency_state,
        }
    }

    /// Whether this bin must be part of the next collection route
    pub fn needs_collection(&self) -> bool {
        self.fill_level > ELIGIBLE_FILL_THRESHOLD || self.urgency_state.forces_collection()
    }

    /// Relative urgency score of this bin
    pub fn priority(&self) -> f64 {
        scoring::priority_score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(fill_level: i32, urgency_state: UrgencyState) -> CollectionPoint {
        CollectionPoint::new("BIN-001", Location::new(0.0, 0.0), fill_level, 3, urgency_state)
    }

    #[test]
    fn test_needs_collection_by_fill() {
        assert!(!point(50, UrgencyState::Normal).needs_collection());
        assert!(point(51, UrgencyState::Normal).needs_collection());
    }

    #[test]
    fn test_needs_collection_by_state() {
        assert!(point(0, UrgencyState::Elevated).needs_collection());
        assert!(point(10, UrgencyState::Critical).needs_collection());
    }

    #[test]
    fn test_state_accepts_feed_names() {
        let online: UrgencyState = serde_json::from_str("\"online\"").unwrap();
        let warning: UrgencyState = serde_json::from_str("\"warning\"").unwrap();
        let critical: UrgencyState = serde_json::from_str("\"critical\"").unwrap();

        assert_eq!(online, UrgencyState::Normal);
        assert_eq!(warning, UrgencyState::Elevated);
        assert_eq!(critical, UrgencyState::Critical);
        assert_eq!(serde_json::to_string(&UrgencyState::Elevated).unwrap(), "\"elevated\"");
    }

    #[test]
    fn test_point_json_shape() {
        let json = r#"{
            "id": "BIN-042",
            "location": { "lat": 26.9, "lng": 75.8 },
            "fillLevel": 72,
            "odorIndex": 5,
            "urgencyState": "elevated"
        }"#;
        let parsed: CollectionPoint = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.id, "BIN-042");
        assert_eq!(parsed.fill_level, 72);
        assert_eq!(parsed.odor_index, 5);
        assert_eq!(parsed.urgency_state, UrgencyState::Elevated);
    }
}
