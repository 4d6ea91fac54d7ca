// Loading collection points from the dashboard sensor feed

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::PlannerError;
use crate::models::{CollectionPoint, Location, UrgencyState};

/// Top-level shape of the sensor feed
#[derive(Debug, Clone, Deserialize)]
pub struct SensorFeed {
    pub sensors: Vec<SensorRecord>,
}

/// One sensor reading as published by the feed
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub fill_level: i32,
    pub odor: i32,
    #[serde(default)]
    pub status: UrgencyState,
}

impl From<SensorRecord> for CollectionPoint {
    fn from(record: SensorRecord) -> Self {
        CollectionPoint::new(
            record.id,
            Location::new(record.lat, record.lng),
            record.fill_level,
            record.odor,
            record.status,
        )
    }
}

impl SensorFeed {
    /// Converts the feed into collection points, keeping feed order
    pub fn into_points(self) -> Vec<CollectionPoint> {
        self.sensors
            .into_iter()
            .inspect(warn_out_of_range)
            .map(CollectionPoint::from)
            .collect()
    }
}

/// Parses feed JSON text into collection points
pub fn parse_feed(json: &str) -> Result<Vec<CollectionPoint>, PlannerError> {
    let feed: SensorFeed = serde_json::from_str(json)?;
    let points = feed.into_points();
    debug!(count = points.len(), "parsed sensor feed");
    Ok(points)
}

/// Reads and parses a feed file
pub fn load_feed<P: AsRef<Path>>(path: P) -> Result<Vec<CollectionPoint>, PlannerError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading sensor feed");
    let text = fs::read_to_string(path)?;
    parse_feed(&text)
}

// Readings outside the nominal ranges are kept as-is
fn warn_out_of_range(record: &SensorRecord) {
    if !(0..=100).contains(&record.fill_level) {
        warn!(id = %record.id, fill_level = record.fill_level, "fill level outside 0..=100");
    }
    if !(0..=10).contains(&record.odor) {
        warn!(id = %record.id, odor = record.odor, "odor index outside 0..=10");
    }
}
