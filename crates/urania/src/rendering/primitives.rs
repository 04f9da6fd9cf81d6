use crate::aspects::AspectType;
use crate::bodies::{Body, Sign};
use serde::{Deserialize, Serialize};

/// Point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 255,
            }),
            8 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// Convert to CSS string
    pub fn to_css_string(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub dash_array: Option<Vec<f64>>,
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Hard aspects solid, soft aspects dashed, quincunx dotted.
    pub fn for_aspect(aspect_type: AspectType) -> Self {
        match aspect_type {
            AspectType::Conjunction | AspectType::Square | AspectType::Opposition => {
                LineStyle::Solid
            }
            AspectType::Sextile | AspectType::Trine => LineStyle::Dashed,
            AspectType::Quincunx => LineStyle::Dotted,
        }
    }
}

/// Shape primitives for chart rendering.
///
/// Angles are planar radians as produced by
/// [`angle_for_degree`](crate::geometry::angle_for_degree), rotation included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Open arc along a circle, used for chart-shape and stellium highlights.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        large_arc: bool,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        position: Point,
        content: String,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    },
    PlanetGlyph {
        center: Point,
        body: Body,
        glyph: String,
        size: f64,
        color: Color,
        retrograde: bool,
    },
    AspectLine {
        from: Point,
        to: Point,
        from_body: Body,
        to_body: Body,
        aspect_type: AspectType,
        color: Color,
        width: f64,
        style: LineStyle,
    },
    SignSegment {
        center: Point,
        sign: Sign,
        start_angle: f64,
        end_angle: f64,
        radius_inner: f64,
        radius_outer: f64,
        fill: Color,
        stroke: Option<Stroke>,
    },
}
