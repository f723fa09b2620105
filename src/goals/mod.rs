//! Daily goals module.
//!
//! Per-day target/achieved records produced by the goal-tracking layer and
//! the stateless statistics aggregated over them for display.

pub mod statistics;
pub mod types;

// Re-exports for convenience
pub use types::DailyGoal;
