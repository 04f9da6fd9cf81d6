use crate::aspects::AspectType;
use crate::bodies::Body;
use crate::rendering::primitives::Color;
use std::collections::HashMap;

/// Ring radii as fractions of the wheel's outer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    pub zodiac_outer: f64,
    pub zodiac_inner: f64,
    pub planets: f64,
    /// Radius on which aspect lines start and end.
    pub aspects: f64,
    pub house_numbers: f64,
    /// Radius of the chart-shape and stellium highlight arcs.
    pub highlight: f64,
}

impl Default for RingRadii {
    fn default() -> Self {
        Self {
            zodiac_outer: 1.0,
            zodiac_inner: 0.85,
            planets: 0.74,
            aspects: 0.55,
            house_numbers: 0.6,
            highlight: 0.8,
        }
    }
}

/// Visual styling configuration for chart elements
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Blank margin between the canvas edge and the wheel, in pixels.
    pub padding: f64,
    pub radii: RingRadii,
    pub sign_colors: Vec<Color>,
    pub planet_colors: HashMap<Body, Color>,
    pub aspect_colors: HashMap<AspectType, Color>,
    pub aspect_stroke_width: f64,
    pub highlight_color: Color,
    pub highlight_width: f64,
    pub background_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub glyph_size: f64,
    pub draw_chart_shape: bool,
    pub draw_stelliums: bool,
    /// Whether free-text pattern descriptions are parsed and drawn.
    pub accept_legacy_patterns: bool,
}

fn hex(value: &str) -> Color {
    Color::from_hex(value).unwrap_or(Color::WHITE)
}

impl Default for VisualConfig {
    fn default() -> Self {
        // Default traditional dark theme colors
        let sign_colors = vec![
            hex("#DC143C"), // Aries - crimson
            hex("#8B4513"), // Taurus - saddle brown
            hex("#FFD700"), // Gemini - gold
            hex("#87CEEB"), // Cancer - sky blue
            hex("#FFA500"), // Leo - orange
            hex("#90EE90"), // Virgo - light green
            hex("#FFB6C1"), // Libra - light pink
            hex("#8B0000"), // Scorpio - dark red
            hex("#FFD700"), // Sagittarius - gold
            hex("#696969"), // Capricorn - dim gray
            hex("#00CED1"), // Aquarius - dark turquoise
            hex("#9370DB"), // Pisces - medium purple
        ];

        let planet_colors = HashMap::from([
            (Body::Sun, hex("#FFD700")),
            (Body::Moon, hex("#C0C0C0")),
            (Body::Mercury, hex("#8B7355")),
            (Body::Venus, hex("#FFC0CB")),
            (Body::Mars, hex("#DC143C")),
            (Body::Jupiter, hex("#FFA500")),
            (Body::Saturn, hex("#808080")),
            (Body::Uranus, hex("#87CEEB")),
            (Body::Neptune, hex("#4169E1")),
            (Body::Pluto, hex("#2F4F4F")),
            (Body::NorthNode, hex("#00CED1")),
        ]);

        let aspect_colors = HashMap::from([
            (AspectType::Conjunction, hex("#DC143C")),
            (AspectType::Opposition, hex("#4169E1")),
            (AspectType::Trine, hex("#228B22")),
            (AspectType::Square, hex("#FF0000")),
            (AspectType::Sextile, hex("#FFA500")),
            (AspectType::Quincunx, hex("#9370DB")),
        ]);

        Self {
            padding: 20.0,
            radii: RingRadii::default(),
            sign_colors,
            planet_colors,
            aspect_colors,
            aspect_stroke_width: 2.0,
            highlight_color: hex("#d4af3780"),
            highlight_width: 6.0,
            background_color: Color::BLACK,
            stroke_color: hex("#d4af37"), // Gold
            stroke_width: 1.0,
            glyph_size: 12.0,
            draw_chart_shape: true,
            draw_stelliums: true,
            accept_legacy_patterns: true,
        }
    }
}

impl VisualConfig {
    pub fn sign_color(&self, index: u8) -> Color {
        self.sign_colors
            .get(index as usize)
            .copied()
            .unwrap_or(Color::WHITE)
    }

    pub fn planet_color(&self, body: Body) -> Color {
        self.planet_colors.get(&body).copied().unwrap_or(Color::WHITE)
    }

    pub fn aspect_color(&self, aspect_type: AspectType) -> Color {
        self.aspect_colors
            .get(&aspect_type)
            .copied()
            .unwrap_or(Color::WHITE)
    }
}
