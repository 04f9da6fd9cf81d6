use crate::bodies::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aspect classes the wheel knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
}

impl AspectType {
    pub const ALL: [AspectType; 6] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
        AspectType::Quincunx,
    ];

    /// Exact angle for this aspect
    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Quincunx => 150.0,
            AspectType::Opposition => 180.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Sextile => "sextile",
            AspectType::Square => "square",
            AspectType::Trine => "trine",
            AspectType::Opposition => "opposition",
            AspectType::Quincunx => "quincunx",
        }
    }

    /// Pick whichever candidate's exact angle lies closest to `separation`.
    ///
    /// Used only to tell apart the edges of a pattern that the pattern
    /// detector already classified as a group.
    pub fn nearest(separation: f64, candidates: &[AspectType]) -> Option<AspectType> {
        candidates.iter().copied().min_by(|a, b| {
            let da = (separation - a.exact_angle()).abs();
            let db = (separation - b.exact_angle()).abs();
            da.total_cmp(&db)
        })
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drawable aspect line between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectEdge {
    pub from: Body,
    pub to: Body,
    pub aspect_type: AspectType,
}

impl AspectEdge {
    pub fn new(from: Body, to: Body, aspect_type: AspectType) -> Self {
        Self {
            from,
            to,
            aspect_type,
        }
    }
}
