//! Daily goal type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A per-day goal record pairing targets with what was actually achieved.
///
/// Records are written by the goal-tracking layer and read-only for
/// statistics purposes. There is no invariant that achieved stays below
/// target; overshooting a goal is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGoal {
    /// Calendar day this goal applies to
    pub date: NaiveDate,
    /// Target distance in meters
    pub distance_target: f64,
    /// Target active time in seconds
    pub time_target: f64,
    /// Target number of shapes to draw
    pub shapes_target: u32,
    /// Distance covered in meters
    pub distance_achieved: f64,
    /// Active time spent in seconds
    pub time_achieved: f64,
    /// Number of shapes drawn
    pub shapes_achieved: u32,
}

impl DailyGoal {
    /// Create a goal for a day with the given targets and nothing achieved yet.
    pub fn new(date: NaiveDate, distance_target: f64, time_target: f64, shapes_target: u32) -> Self {
        Self {
            date,
            distance_target,
            time_target,
            shapes_target,
            distance_achieved: 0.0,
            time_achieved: 0.0,
            shapes_achieved: 0,
        }
    }

    /// Whether the distance target was met. Equality counts as reached.
    pub fn distance_reached(&self) -> bool {
        self.distance_achieved >= self.distance_target
    }

    /// Whether the time target was met. Equality counts as reached.
    pub fn time_reached(&self) -> bool {
        self.time_achieved >= self.time_target
    }

    /// Whether the shape target was met. Equality counts as reached.
    pub fn shapes_reached(&self) -> bool {
        self.shapes_achieved >= self.shapes_target
    }

    /// Distance progress as a fraction clamped to [0, 1].
    /// A zero target counts as already reached.
    pub fn progress(&self) -> f64 {
        if self.distance_target == 0.0 {
            return 1.0;
        }
        (self.distance_achieved / self.distance_target).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 2).unwrap()
    }

    #[test]
    fn test_new_goal_starts_unachieved() {
        let goal = DailyGoal::new(day(), 10_000.0, 3_600.0, 3);
        assert_eq!(goal.distance_achieved, 0.0);
        assert_eq!(goal.time_achieved, 0.0);
        assert_eq!(goal.shapes_achieved, 0);
        assert!(!goal.distance_reached());
        assert_eq!(goal.progress(), 0.0);
    }

    #[test]
    fn test_equality_counts_as_reached() {
        let mut goal = DailyGoal::new(day(), 10_000.0, 3_600.0, 3);
        goal.distance_achieved = 10_000.0;
        goal.time_achieved = 3_600.0;
        goal.shapes_achieved = 3;

        assert!(goal.distance_reached());
        assert!(goal.time_reached());
        assert!(goal.shapes_reached());
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut goal = DailyGoal::new(day(), 10_000.0, 3_600.0, 3);
        goal.distance_achieved = 25_000.0;
        assert_eq!(goal.progress(), 1.0);

        goal.distance_achieved = 2_500.0;
        assert!((goal.progress() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_is_reached() {
        let goal = DailyGoal::new(day(), 0.0, 0.0, 0);
        assert!(goal.distance_reached());
        assert!(goal.time_reached());
        assert!(goal.shapes_reached());
        assert_eq!(goal.progress(), 1.0);
    }
}
