use rayon::prelude::*;
use tracing::{debug, trace};

use crate::algorithms::config::PlannerConfig;
use crate::algorithms::RoutePlanner;
use crate::error::PlannerError;
use crate::models::{CollectionPoint, Km, Location, RoutePlan};
use crate::utils::estimate::estimate_minutes;
use crate::utils::scoring::composite_score;

/// Greedy nearest-best-next planner.
///
/// Starting at the depot, repeatedly drives to the unvisited bin with the
/// highest `priority / (distance + 0.5)` and finally returns to the depot.
/// Score ties go to the bin that appears first in the input.
#[derive(Debug, Clone, Default)]
pub struct GreedyRoutePlanner {
    config: PlannerConfig,
}

impl GreedyRoutePlanner {
    /// Creates a planner with the given configuration
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Creates a planner using `depot` and otherwise default settings
    pub fn with_depot(depot: Location) -> Self {
        Self::new(PlannerConfig::default().with_depot(depot))
    }

    /// Settings this planner was built with
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Bins that need collecting, in input order
    pub fn eligible_points<'a>(&self, points: &'a [CollectionPoint]) -> Vec<&'a CollectionPoint> {
        points.iter().filter(|point| point.needs_collection()).collect()
    }

    /// Orders `candidates` greedily from the depot.
    /// Returns the visiting order and the closed-loop distance.
    pub fn sequence<'a>(&self, candidates: Vec<&'a CollectionPoint>) -> (Vec<&'a CollectionPoint>, Km) {
        let depot = self.config.depot;

        // Priority does not depend on position, so score it once
        let mut unvisited: Vec<(&CollectionPoint, f64)> = candidates
            .into_iter()
            .map(|point| (point, point.priority()))
            .collect();

        let mut route = Vec::with_capacity(unvisited.len());
        let mut current = depot;
        let mut total_distance = 0.0;

        while !unvisited.is_empty() {
            // Falls back to the first remaining bin if no score beats -inf (NaN input)
            let mut best_index = 0;
            let mut best_score = f64::NEG_INFINITY;

            for (index, (point, priority)) in unvisited.iter().enumerate() {
                let score = composite_score(*priority, current.distance_to(&point.location));
                if score > best_score {
                    best_score = score;
                    best_index = index;
                }
            }

            // Vec::remove keeps the input order of the rest, which the tie-break relies on
            let (chosen, _) = unvisited.remove(best_index);
            let leg = current.distance_to(&chosen.location);
            total_distance += leg;
            trace!(
                step = route.len() + 1,
                id = %chosen.id,
                score = best_score,
                leg_km = leg,
                "selected next bin"
            );

            current = chosen.location;
            route.push(chosen);
        }

        if !route.is_empty() {
            total_distance += current.distance_to(&depot);
        }

        (route, total_distance)
    }

    /// Plans each point set independently and in parallel.
    /// Results are in the same order as `fleets`.
    pub fn plan_many(&self, fleets: &[Vec<CollectionPoint>]) -> Vec<RoutePlan> {
        fleets.par_iter().map(|points| self.plan(points)).collect()
    }

    /// Plans honoring `validate_input` from the configuration
    pub fn run(&self, points: &[CollectionPoint]) -> Result<RoutePlan, PlannerError> {
        if self.config.validate_input {
            self.plan_checked(points)
        } else {
            Ok(self.plan(points))
        }
    }
}

impl RoutePlanner for GreedyRoutePlanner {
    fn depot(&self) -> Location {
        self.config.depot
    }

    fn plan(&self, points: &[CollectionPoint]) -> RoutePlan {
        let eligible = self.eligible_points(points);
        debug!(
            total = points.len(),
            eligible = eligible.len(),
            depot_lat = self.config.depot.lat,
            depot_lng = self.config.depot.lng,
            "planning collection route"
        );

        if eligible.is_empty() {
            debug!("no bins require collection");
            return RoutePlan::empty();
        }

        let (route, total_distance) = self.sequence(eligible);
        let estimated_minutes = estimate_minutes(total_distance, route.len());
        debug!(
            bins = route.len(),
            distance_km = total_distance,
            minutes = estimated_minutes,
            "route planned"
        );

        RoutePlan::new(route.into_iter().cloned().collect(), total_distance, estimated_minutes)
    }
}
