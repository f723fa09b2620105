//! Statistics aggregation over daily goal records.
//!
//! All functions are pure, deterministic, and total over arbitrary (possibly
//! empty) collections; degenerate input normalizes to zero rather than
//! failing.

use super::types::DailyGoal;

/// Sum of achieved distance across all goals, in meters.
pub fn total_distance(goals: &[DailyGoal]) -> f64 {
    goals.iter().map(|g| g.distance_achieved).sum()
}

/// Sum of achieved active time across all goals, in seconds.
pub fn total_time(goals: &[DailyGoal]) -> f64 {
    goals.iter().map(|g| g.time_achieved).sum()
}

/// Number of goals whose achieved distance meets or exceeds its target.
pub fn reached_goals_count(goals: &[DailyGoal]) -> usize {
    goals.iter().filter(|g| g.distance_reached()).count()
}

/// Overall average speed in meters per second: total achieved distance over
/// total achieved time. Zero total time yields 0.0, never an error.
pub fn average_speed(goals: &[DailyGoal]) -> f64 {
    let time = total_time(goals);
    if time == 0.0 {
        return 0.0;
    }
    total_distance(goals) / time
}

/// Total number of shapes drawn across all goals.
pub fn shapes_drawn_count(goals: &[DailyGoal]) -> u32 {
    goals.iter().map(|g| g.shapes_achieved).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(day: u32, distance_achieved: f64, time_achieved: f64) -> DailyGoal {
        let mut goal = DailyGoal::new(
            NaiveDate::from_ymd_opt(2023, 4, day).unwrap(),
            10.0,
            10.0,
            1,
        );
        goal.distance_achieved = distance_achieved;
        goal.time_achieved = time_achieved;
        goal
    }

    #[test]
    fn test_empty_collection_yields_zero_everywhere() {
        let goals: Vec<DailyGoal> = Vec::new();
        assert_eq!(total_distance(&goals), 0.0);
        assert_eq!(total_time(&goals), 0.0);
        assert_eq!(reached_goals_count(&goals), 0);
        assert_eq!(average_speed(&goals), 0.0);
        assert_eq!(shapes_drawn_count(&goals), 0);
    }

    #[test]
    fn test_aggregation_fixture() {
        // Achieved distances [10, 5, 0, 15] with matching times and a
        // distance target of 10 on every day.
        let goals = vec![
            goal(1, 10.0, 10.0),
            goal(2, 5.0, 5.0),
            goal(3, 0.0, 0.0),
            goal(4, 15.0, 15.0),
        ];

        assert_eq!(total_distance(&goals), 30.0);
        assert_eq!(total_time(&goals), 30.0);
        assert_eq!(average_speed(&goals), 1.0);
        // 10 meets its target exactly, 15 exceeds it
        assert_eq!(reached_goals_count(&goals), 2);
    }

    #[test]
    fn test_average_speed_with_zero_total_time() {
        let goals = vec![goal(1, 12.0, 0.0), goal(2, 8.0, 0.0)];
        assert_eq!(total_distance(&goals), 20.0);
        assert_eq!(average_speed(&goals), 0.0);
    }

    #[test]
    fn test_shapes_drawn_count() {
        let mut first = goal(1, 0.0, 0.0);
        first.shapes_achieved = 2;
        let mut second = goal(2, 0.0, 0.0);
        second.shapes_achieved = 5;

        assert_eq!(shapes_drawn_count(&[first, second]), 7);
    }
}
