pub mod config;
pub mod greedy;

// Common algorithm traits
use crate::error::PlannerError;
use crate::models::{CollectionPoint, Location, RoutePlan};

/// Trait for collection route planners
pub trait RoutePlanner {
    /// Depot every planned route starts from and returns to
    fn depot(&self) -> Location;

    /// Plan a route over the given points. Never fails: when nothing needs
    /// collecting the plan is empty and carries a status message.
    fn plan(&self, points: &[CollectionPoint]) -> RoutePlan;

    /// Same as `plan`, but rejects non-finite coordinates first
    fn plan_checked(&self, points: &[CollectionPoint]) -> Result<RoutePlan, PlannerError> {
        validate_points(self.depot(), points)?;
        Ok(self.plan(points))
    }
}

/// Rejects NaN or infinite coordinates on the depot or any point
pub fn validate_points(depot: Location, points: &[CollectionPoint]) -> Result<(), PlannerError> {
    if !depot.is_finite() {
        return Err(PlannerError::InvalidDepot {
            lat: depot.lat,
            lng: depot.lng,
        });
    }

    match points.iter().find(|point| !point.location.is_finite()) {
        Some(point) => Err(PlannerError::InvalidCoordinate {
            id: point.id.clone(),
            lat: point.location.lat,
            lng: point.location.lng,
        }),
        None => Ok(()),
    }
}
