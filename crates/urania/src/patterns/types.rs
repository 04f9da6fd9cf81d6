use crate::aspects::AspectEdge;
use crate::bodies::CelestialBody;
use crate::span::{occupied_span, stellium_span_circular, AngularSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bodies filling one named role of a pattern (a vertex, the apex, ...).
///
/// Derivation only ever looks at the first entry.
pub type Role<'a> = Vec<&'a CelestialBody>;

/// Pattern variants without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    ChartShape,
    Stellium,
    TSquare,
    GrandTrine,
    GrandCross,
    Yod,
    Kite,
    MysticRectangle,
}

impl PatternKind {
    /// Match a free-form label such as "T-Square" or "Grand Trine".
    pub fn from_label(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "chartshape" | "shape" => Some(PatternKind::ChartShape),
            "stellium" => Some(PatternKind::Stellium),
            "tsquare" => Some(PatternKind::TSquare),
            "grandtrine" => Some(PatternKind::GrandTrine),
            "grandcross" | "grandsquare" => Some(PatternKind::GrandCross),
            "yod" | "fingerofgod" => Some(PatternKind::Yod),
            "kite" => Some(PatternKind::Kite),
            "mysticrectangle" => Some(PatternKind::MysticRectangle),
            _ => None,
        }
    }

    /// Wire tag used by structured records.
    pub fn key(&self) -> &'static str {
        match self {
            PatternKind::ChartShape => "chart_shape",
            PatternKind::Stellium => "stellium",
            PatternKind::TSquare => "t_square",
            PatternKind::GrandTrine => "grand_trine",
            PatternKind::GrandCross => "grand_cross",
            PatternKind::Yod => "yod",
            PatternKind::Kite => "kite",
            PatternKind::MysticRectangle => "mystic_rectangle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PatternKind::ChartShape => "Chart Shape",
            PatternKind::Stellium => "Stellium",
            PatternKind::TSquare => "T-Square",
            PatternKind::GrandTrine => "Grand Trine",
            PatternKind::GrandCross => "Grand Cross",
            PatternKind::Yod => "Yod",
            PatternKind::Kite => "Kite",
            PatternKind::MysticRectangle => "Mystic Rectangle",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A detected aspect pattern, borrowing its bodies from the chart snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern<'a> {
    ChartShape {
        shape: Option<String>,
        bodies: Role<'a>,
    },
    Stellium {
        bodies: Role<'a>,
    },
    TSquare {
        vertex1: Role<'a>,
        vertex2: Role<'a>,
        apex: Role<'a>,
    },
    GrandTrine {
        vertices: Vec<Role<'a>>,
    },
    GrandCross {
        vertices: Vec<Role<'a>>,
    },
    Yod {
        base1: Role<'a>,
        base2: Role<'a>,
        apex: Role<'a>,
    },
    Kite {
        /// The underlying grand trine.
        vertices: Vec<Role<'a>>,
        apex: Role<'a>,
    },
    MysticRectangle {
        vertices: Vec<Role<'a>>,
    },
}

impl<'a> Pattern<'a> {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::ChartShape { .. } => PatternKind::ChartShape,
            Pattern::Stellium { .. } => PatternKind::Stellium,
            Pattern::TSquare { .. } => PatternKind::TSquare,
            Pattern::GrandTrine { .. } => PatternKind::GrandTrine,
            Pattern::GrandCross { .. } => PatternKind::GrandCross,
            Pattern::Yod { .. } => PatternKind::Yod,
            Pattern::Kite { .. } => PatternKind::Kite,
            Pattern::MysticRectangle { .. } => PatternKind::MysticRectangle,
        }
    }

    /// Aspect lines to draw for this pattern.
    pub fn edges(&self) -> Vec<AspectEdge> {
        super::derive::derive_lines(self)
    }

    /// Every participating body, each listed once, in role order.
    pub fn bodies(&self) -> Vec<&'a CelestialBody> {
        let roles: Vec<&Role<'a>> = match self {
            Pattern::ChartShape { bodies, .. } | Pattern::Stellium { bodies } => vec![bodies],
            Pattern::TSquare {
                vertex1,
                vertex2,
                apex,
            } => vec![vertex1, vertex2, apex],
            Pattern::Yod { base1, base2, apex } => vec![base1, base2, apex],
            Pattern::GrandTrine { vertices }
            | Pattern::GrandCross { vertices }
            | Pattern::MysticRectangle { vertices } => vertices.iter().collect(),
            Pattern::Kite { vertices, apex } => {
                let mut roles: Vec<&Role<'a>> = vertices.iter().collect();
                roles.push(apex);
                roles
            }
        };

        let mut out: Vec<&'a CelestialBody> = Vec::new();
        for body in roles.into_iter().flatten() {
            if !out.iter().any(|b| b.name == body.name) {
                out.push(*body);
            }
        }
        out
    }

    /// Arc to highlight for span-type patterns. Other variants have none.
    pub fn span(&self) -> Option<AngularSpan> {
        match self {
            Pattern::ChartShape { bodies, .. } => occupied_span(bodies.iter().copied()),
            Pattern::Stellium { bodies } => stellium_span_circular(bodies.iter().copied()),
            _ => None,
        }
    }
}
