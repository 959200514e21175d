//! Waypoints and route geometry.
//!
//! A route is an ordered list of [`Waypoint`]s in traversal order. This
//! module holds the point type shared by the proxy and the viewer together
//! with the small amount of geometry the viewer needs: marker headings and
//! the haversine length of a path.

use std::fmt;

use geo::prelude::*;
use geo::Point;
use serde::{Deserialize, Serialize};

/// Map center and marker position used when no route is loaded.
pub const DEFAULT_CENTER: Waypoint = Waypoint {
    latitude: 17.385044,
    longitude: 78.486671,
};

/// A single point on a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Waypoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    fn to_point(self) -> Point<f64> {
        // geo works in (x=lon, y=lat)
        Point::new(self.longitude, self.latitude)
    }
}

/// Formats as `lat,lng`, the form the directions service expects.
impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Heading in degrees from `from` to `to`, used to rotate the vehicle marker.
///
/// This is the raw `atan2(Δlat, Δlng)` angle measured counter-clockwise from
/// east, not a compass bearing. Two identical points yield `0.0`.
pub fn heading(from: Waypoint, to: Waypoint) -> f64 {
    let dy = to.latitude - from.latitude;
    let dx = to.longitude - from.longitude;
    dy.atan2(dx).to_degrees()
}

/// Length of a path in meters, summing haversine distances between
/// consecutive waypoints. Empty and single-point paths have length zero.
pub fn path_length_m(path: &[Waypoint]) -> f64 {
    path.windows(2)
        .map(|pair| pair[0].to_point().haversine_distance(&pair[1].to_point()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_of_identical_points_is_zero() {
        let p = Waypoint::new(17.0, 78.0);
        assert_eq!(heading(p, p), 0.0);
    }

    #[test]
    fn heading_follows_atan2_of_lat_over_lng() {
        let origin = Waypoint::new(0.0, 0.0);
        assert_eq!(heading(origin, Waypoint::new(0.0, 1.0)), 0.0);
        assert!((heading(origin, Waypoint::new(1.0, 0.0)) - 90.0).abs() < 1e-9);
        assert!((heading(origin, Waypoint::new(1.0, 1.0)) - 45.0).abs() < 1e-9);
        assert!((heading(origin, Waypoint::new(0.0, -1.0)) - 180.0).abs() < 1e-9);
        assert!((heading(origin, Waypoint::new(-1.0, 0.0)) + 90.0).abs() < 1e-9);
    }

    #[test]
    fn displays_as_query_coordinate() {
        assert_eq!(DEFAULT_CENTER.to_string(), "17.385044,78.486671");
    }

    #[test]
    fn serializes_with_full_field_names() {
        let json = serde_json::to_value(Waypoint::new(1.5, -2.25)).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": 1.5, "longitude": -2.25}));
    }

    #[test]
    fn path_length() {
        assert_eq!(path_length_m(&[]), 0.0);
        assert_eq!(path_length_m(&[DEFAULT_CENTER]), 0.0);

        // One degree of latitude is roughly 111 km
        let len = path_length_m(&[Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 0.0)]);
        assert!((len - 111_195.0).abs() < 500.0, "got {len}");

        let there_and_back = path_length_m(&[
            Waypoint::new(0.0, 0.0),
            Waypoint::new(1.0, 0.0),
            Waypoint::new(0.0, 0.0),
        ]);
        assert!((there_and_back - 2.0 * len).abs() < 1e-6);
    }
}
