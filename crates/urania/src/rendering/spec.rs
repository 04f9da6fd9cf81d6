use crate::patterns::PatternKind;
use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Chart metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub patterns: Vec<PatternMetadata>,
}

/// One drawn pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub kind: PatternKind,
    pub edge_count: usize,
    /// Set for chart shapes and stelliums when an arc was drawn.
    pub has_arc: bool,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    /// Wheel rotation in radians, from the ascendant.
    pub rotation_offset: f64,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            rotation_offset: 0.0,
            background_color: Color::BLACK,
            shapes: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }
}
