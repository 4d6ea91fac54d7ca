// Route plan model returned by the planners

use serde::{Serialize, Serializer};
use std::fmt;

use crate::models::{CollectionPoint, Km, Location, Minutes};

/// Status attached to a plan with nothing to collect
pub const NO_COLLECTION_MESSAGE: &str = "No bins require collection at this time";

/// An ordered collection route starting and ending at the depot.
///
/// Serialize-only: `totalDistance` is written rounded to two decimals, so
/// the JSON cannot reproduce the exact distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    /// Bins in visiting order; the depot is implicit at both ends
    pub route: Vec<CollectionPoint>,

    /// Total driven distance including the return leg, unrounded
    #[serde(rename = "totalDistance", serialize_with = "serialize_rounded_km")]
    pub total_distance_km: Km,

    /// Driving plus dwell time, rounded up to whole minutes
    #[serde(rename = "estimatedTime")]
    pub estimated_minutes: Minutes,

    /// Number of bins on the route
    pub bins_to_collect: usize,

    /// Explanation, only present when the route is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RoutePlan {
    /// Creates a plan for a non-empty visiting sequence
    pub fn new(route: Vec<CollectionPoint>, total_distance_km: Km, estimated_minutes: Minutes) -> Self {
        let bins_to_collect = route.len();
        Self {
            route,
            total_distance_km,
            estimated_minutes,
            bins_to_collect,
            message: None,
        }
    }

    /// The plan returned when no bin requires collection
    pub fn empty() -> Self {
        Self {
            route: Vec::new(),
            total_distance_km: 0.0,
            estimated_minutes: 0,
            bins_to_collect: 0,
            message: Some(NO_COLLECTION_MESSAGE.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Total distance rounded to two decimals for display
    pub fn display_distance(&self) -> Km {
        round_km(self.total_distance_km)
    }

    /// Ids of the visited bins in order
    pub fn bin_ids(&self) -> Vec<&str> {
        self.route.iter().map(|point| point.id.as_str()).collect()
    }

    /// Distance of every leg depot -> p1 -> ... -> pn -> depot.
    /// Empty for an empty route.
    pub fn legs(&self, depot: Location) -> Vec<Km> {
        if self.route.is_empty() {
            return Vec::new();
        }

        let mut legs = Vec::with_capacity(self.route.len() + 1);
        let mut current = depot;
        for point in &self.route {
            legs.push(current.distance_to(&point.location));
            current = point.location;
        }
        legs.push(current.distance_to(&depot));
        legs
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            return f.write_str(message);
        }
        write!(
            f,
            "{} bins, {:.2} km, ~{} min",
            self.bins_to_collect,
            self.display_distance(),
            self.estimated_minutes
        )
    }
}

fn round_km(km: Km) -> Km {
    (km * 100.0).round() / 100.0
}

fn serialize_rounded_km<S: Serializer>(km: &Km, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_km(*km))
}
