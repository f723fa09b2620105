//! Path accumulation for a drawing session.

use serde::{Deserialize, Serialize};

use super::geo::haversine_distance;
use super::types::GeoPoint;

/// The ordered point sequence of one drawing session.
///
/// Insertion order is significant: it defines both the rendered polyline and
/// the traversal order for distance computation. Any sequence, including the
/// empty one, is valid; points are stored exactly as received. Not designed
/// for concurrent mutation; callers serialize access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathTracker {
    points: Vec<GeoPoint>,
}

impl PathTracker {
    /// Create an empty path.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a path seeded with an initial point sequence.
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Append a point to the end of the path.
    pub fn add_point(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Remove all points. Idempotent.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of points currently in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The ordered point sequence as a read snapshot.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Cumulative haversine distance over consecutive point pairs, in meters.
    /// Zero for paths of fewer than two points.
    pub fn distance_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| {
                haversine_distance(
                    pair[0].latitude,
                    pair[0].longitude,
                    pair[1].latitude,
                    pair[1].longitude,
                )
            })
            .sum()
    }

    /// The ordered point list for line rendering on a map. No geometric
    /// transformation is applied; the map layer consumes the stored order.
    pub fn polyline(&self) -> Vec<GeoPoint> {
        self.points.clone()
    }
}
