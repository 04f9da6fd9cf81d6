//! Degree to screen mapping for the chart wheel.
//!
//! Every function here is pure: the ascendant rotation is always passed in, so
//! the same `(degree, ascendant)` pair maps to the same point no matter when or
//! how often it is called.

use crate::rendering::primitives::Point;
use std::f64::consts::PI;

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

/// Wheel rotation (radians) that puts the ascendant at nine o'clock.
pub fn rotation_for_ascendant(ascendant_degree: f64) -> f64 {
    normalize_degrees(270.0 + normalize_degrees(ascendant_degree)) * PI / 180.0
}

/// Planar angle (radians) for a zodiacal degree, ascendant rotation included.
pub fn angle_for_degree(degree: f64, ascendant_degree: f64) -> f64 {
    let base = normalize_degrees(270.0 - normalize_degrees(degree)) * PI / 180.0;
    base + rotation_for_ascendant(ascendant_degree)
}

/// Convert polar coordinates to cartesian
pub fn polar_to_cartesian(angle: f64, radius: f64, center: Point) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

/// Point on a circle of `radius` around `center` for a zodiacal degree.
pub fn position_for_degree(
    degree: f64,
    ascendant_degree: f64,
    radius: f64,
    center: Point,
) -> Point {
    polar_to_cartesian(angle_for_degree(degree, ascendant_degree), radius, center)
}
