//! Path drawing module.
//!
//! Accumulates the ordered GPS points of a drawing session and derives
//! distance and rendering geometry from them:
//! - `PathTracker` for the live point sequence
//! - `Run` for a completed, timestamped session
//! - geodesic helpers (haversine distance, bounding box)

pub mod geo;
pub mod tracker;
pub mod types;

// Re-exports for convenience
pub use geo::{bounding_box, haversine_distance, GeoBounds};
pub use tracker::PathTracker;
pub use types::{GeoPoint, Run};
