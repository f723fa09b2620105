//! Geodesic helpers for GPS point sequences.

use super::types::GeoPoint;

/// Calculate horizontal distance between two GPS points (Haversine formula)
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS: f64 = 6_371_000.0; // meters

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS * c
}

/// Axis-aligned bounds of a point set, for map-camera fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeoBounds {
    /// Center point of the bounds.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }
}

/// Compute the bounding box of a point sequence. `None` for an empty sequence.
pub fn bounding_box(points: &[GeoPoint]) -> Option<GeoBounds> {
    let first = points.first()?;
    let mut bounds = GeoBounds {
        min_latitude: first.latitude,
        max_latitude: first.latitude,
        min_longitude: first.longitude,
        max_longitude: first.longitude,
    };

    for point in &points[1..] {
        bounds.min_latitude = bounds.min_latitude.min(point.latitude);
        bounds.max_latitude = bounds.max_latitude.max(point.latitude);
        bounds.min_longitude = bounds.min_longitude.min(point.longitude);
        bounds.max_longitude = bounds.max_longitude.max(point.longitude);
    }

    Some(bounds)
}
