//! Path type definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::tracker::PathTracker;

/// A geographic point in double-precision degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point. Coordinates are not range-checked;
    /// the drawing layer accepts whatever the location provider reports.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A completed drawing session: the drawn path plus its start and end times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// The path drawn during the session
    pub path: PathTracker,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session ended
    pub ended_at: DateTime<Utc>,
}

impl Run {
    /// Create a new run from a finished path and its session timestamps.
    pub fn new(path: PathTracker, started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        Self {
            path,
            started_at,
            ended_at,
        }
    }

    /// Total distance drawn, in meters.
    pub fn distance_meters(&self) -> f64 {
        self.path.distance_meters()
    }

    /// Session duration in seconds. Zero if the end precedes the start.
    pub fn duration_seconds(&self) -> f64 {
        let seconds = (self.ended_at - self.started_at).num_milliseconds() as f64 / 1000.0;
        seconds.max(0.0)
    }

    /// Average speed in meters per second. Zero-duration sessions yield 0.
    pub fn average_speed(&self) -> f64 {
        let duration = self.duration_seconds();
        if duration == 0.0 {
            return 0.0;
        }
        self.distance_meters() / duration
    }

    /// The calendar day the session started on.
    pub fn date(&self) -> NaiveDate {
        self.started_at.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_run_duration_and_speed() {
        let mut path = PathTracker::new();
        path.add_point(GeoPoint::new(46.0, 6.0));
        path.add_point(GeoPoint::new(46.0, 6.01));

        let started = Utc.with_ymd_and_hms(2023, 4, 2, 10, 0, 0).unwrap();
        let ended = Utc.with_ymd_and_hms(2023, 4, 2, 10, 10, 0).unwrap();
        let run = Run::new(path, started, ended);

        assert_eq!(run.duration_seconds(), 600.0);
        assert!(run.distance_meters() > 0.0);
        assert!((run.average_speed() - run.distance_meters() / 600.0).abs() < 1e-9);
        assert_eq!(run.date(), started.date_naive());
    }

    #[test]
    fn test_zero_duration_run_has_zero_speed() {
        let mut path = PathTracker::new();
        path.add_point(GeoPoint::new(46.0, 6.0));
        path.add_point(GeoPoint::new(46.1, 6.0));

        let instant = Utc.with_ymd_and_hms(2023, 4, 2, 10, 0, 0).unwrap();
        let run = Run::new(path, instant, instant);

        assert_eq!(run.average_speed(), 0.0);
    }

    #[test]
    fn test_inverted_timestamps_clamp_to_zero() {
        let started = Utc.with_ymd_and_hms(2023, 4, 2, 11, 0, 0).unwrap();
        let ended = Utc.with_ymd_and_hms(2023, 4, 2, 10, 0, 0).unwrap();
        let run = Run::new(PathTracker::new(), started, ended);

        assert_eq!(run.duration_seconds(), 0.0);
        assert_eq!(run.average_speed(), 0.0);
    }
}
