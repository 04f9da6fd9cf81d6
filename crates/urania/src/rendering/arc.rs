//! Arc planning for span highlights.
//!
//! Both planners return planar angles with the ascendant rotation already
//! applied, so a canvas or SVG surface can draw them without further
//! conversion. Zodiac order runs counter-clockwise on screen: increasing
//! longitude means decreasing planar angle.

use crate::geometry::{angle_for_degree, normalize_degrees, polar_to_cartesian};
use crate::rendering::primitives::Point;
use serde::{Deserialize, Serialize};

/// Arc for the chart-shape (occupied span) highlight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcPlan {
    pub start_angle: f64,
    pub end_angle: f64,
    /// Set when the span covers more than 180°, i.e. the long way round.
    pub large_arc: bool,
}

/// Arc for a stellium highlight; always the short way round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StelliumArc {
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Plan the occupied-span arc from `start_deg` to `end_deg`.
///
/// The direction flag follows the numeric span alone; no shortest-path search
/// is made.
pub fn plan_arc(start_deg: f64, end_deg: f64, ascendant_degree: f64) -> ArcPlan {
    let mut span = end_deg - start_deg;
    if span < 0.0 {
        span += 360.0;
    }
    ArcPlan {
        start_angle: angle_for_degree(start_deg, ascendant_degree),
        end_angle: angle_for_degree(end_deg, ascendant_degree),
        large_arc: span > 180.0,
    }
}

/// Plan a stellium arc, swapping the ends when going from `end_deg` back to
/// `start_deg` is the shorter way.
pub fn plan_stellium_arc(start_deg: f64, end_deg: f64, ascendant_degree: f64) -> StelliumArc {
    let forward = normalize_degrees(end_deg - start_deg);
    let backward = normalize_degrees(start_deg - end_deg);
    let (from, to) = if forward > backward {
        (end_deg, start_deg)
    } else {
        (start_deg, end_deg)
    };
    StelliumArc {
        start_angle: angle_for_degree(from, ascendant_degree),
        end_angle: angle_for_degree(to, ascendant_degree),
    }
}

impl ArcPlan {
    /// SVG path data for this arc on a circle of `radius` around `center`.
    pub fn svg_path(&self, center: Point, radius: f64) -> String {
        let start = polar_to_cartesian(self.start_angle, radius, center);
        let end = polar_to_cartesian(self.end_angle, radius, center);
        // sweep flag 0: counter-clockwise in SVG's y-down space
        format!(
            "M {:.3} {:.3} A {:.3} {:.3} 0 {} 0 {:.3} {:.3}",
            start.x,
            start.y,
            radius,
            radius,
            u8::from(self.large_arc),
            end.x,
            end.y
        )
    }
}

impl StelliumArc {
    pub fn svg_path(&self, center: Point, radius: f64) -> String {
        ArcPlan {
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            large_arc: false,
        }
        .svg_path(center, radius)
    }
}
