//! Error types for the route planner.
//!
//! Planning itself never fails: an empty or all-below-threshold input is a
//! normal, empty plan. These errors come from the validating entry points
//! and from loading sensor feeds.

use crate::models::BinId;

/// Errors raised at the boundary of the planner.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// A collection point carries a NaN or infinite coordinate
    #[error("invalid coordinate for bin {id}: ({lat}, {lng})")]
    InvalidCoordinate { id: BinId, lat: f64, lng: f64 },

    /// The depot carries a NaN or infinite coordinate
    #[error("invalid depot coordinate: ({lat}, {lng})")]
    InvalidDepot { lat: f64, lng: f64 },

    /// Reading a feed file failed
    #[error("feed I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed text is not valid JSON for the expected shape
    #[error("feed JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
