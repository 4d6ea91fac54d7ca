//! Planner configuration.

use crate::models::Location;

/// Configuration parameters for route planning.
///
/// Scoring weights, speed and dwell time are fixed policy and live as
/// constants in `utils`; only the depot and input checking vary.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Start and end of every route.
    pub depot: Location,

    /// Reject non-finite coordinates before planning.
    /// When false, degenerate input flows through the arithmetic unchecked.
    pub validate_input: bool,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(depot: Location, validate_input: bool) -> Self {
        Self {
            depot,
            validate_input,
        }
    }

    /// Returns the configuration with a different depot.
    pub fn with_depot(mut self, depot: Location) -> Self {
        self.depot = depot;
        self
    }

    /// Returns the configuration with input validation switched on or off.
    pub fn with_validation(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            depot: Location::default_depot(),
            validate_input: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.depot, Location::new(26.9124, 75.7873));
        assert!(!config.validate_input);
    }

    #[test]
    fn builder_methods() {
        let config = PlannerConfig::default()
            .with_depot(Location::new(52.37, 4.89))
            .with_validation(true);

        assert_eq!(config, PlannerConfig::new(Location::new(52.37, 4.89), true));
    }
}
