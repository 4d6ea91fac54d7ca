// Models module - exports all model types

mod collection_point;
mod location;
mod route;

// Re-export model types
pub use self::collection_point::{CollectionPoint, UrgencyState};
pub use self::location::{Location, DEFAULT_DEPOT_LAT, DEFAULT_DEPOT_LNG};
pub use self::route::{RoutePlan, NO_COLLECTION_MESSAGE};

// Common type aliases for improved code readability
pub type BinId = String;
pub type Km = f64;
pub type Minutes = u32;
