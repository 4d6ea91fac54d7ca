// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::config::PlannerConfig;
pub use algorithms::greedy::GreedyRoutePlanner;
pub use algorithms::RoutePlanner;
pub use error::PlannerError;
pub use models::{CollectionPoint, Location, RoutePlan, UrgencyState};
