//! DrawPath - GPS Path Drawing Core
//!
//! Core library for a GPS path-drawing fitness game. Provides path
//! accumulation with geodesic distance computation, daily-goal statistics
//! aggregation, and a SQLite-backed offline cache for activity suggestions
//! fetched by an external network layer.

pub mod goals;
pub mod path;
pub mod storage;

// Re-export commonly used types
pub use goals::types::DailyGoal;
pub use path::tracker::PathTracker;
pub use path::types::{GeoPoint, Run};
pub use storage::activity_cache::{ActivityCache, ActivityRecord};
pub use storage::database::{Database, DatabaseError};
