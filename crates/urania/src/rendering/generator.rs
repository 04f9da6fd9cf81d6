use crate::aspects::AspectEdge;
use crate::chart::ChartSnapshot;
use crate::geometry::{angle_for_degree, position_for_degree, rotation_for_ascendant};
use crate::layout::rings::{build_house_items, build_planet_items, build_static_zodiac_items};
use crate::patterns::{Pattern, PatternKind};
use crate::rendering::arc::{plan_arc, plan_stellium_arc};
use crate::rendering::primitives::{LineStyle, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartMetadata, ChartSpec, PatternMetadata};
use crate::rendering::visual_config::VisualConfig;

/// ChartSpec generator - converts a chart snapshot to drawable shapes
#[derive(Debug, Clone, Default)]
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom config
    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    /// Generate ChartSpec from a chart snapshot
    pub fn generate(&self, chart: &ChartSnapshot, width: f64, height: f64) -> ChartSpec {
        let mut spec = ChartSpec::new(width, height);
        spec.background_color = self.visual_config.background_color;
        spec.rotation_offset = rotation_for_ascendant(chart.ascendant);

        let wheel = Wheel {
            center: spec.center,
            radius: (width.min(height) / 2.0 - self.visual_config.padding).max(0.0),
            ascendant: chart.ascendant,
        };

        spec.shapes.extend(self.zodiac_shapes(&wheel));
        spec.shapes.extend(self.house_shapes(chart, &wheel));
        spec.shapes.extend(self.planet_shapes(chart, &wheel));

        let mut patterns = Vec::new();
        for pattern in chart.resolved_patterns(self.visual_config.accept_legacy_patterns) {
            let edges = pattern.edges();
            let arc = self.highlight_shape(&pattern, &wheel);

            patterns.push(PatternMetadata {
                kind: pattern.kind(),
                edge_count: edges.len(),
                has_arc: arc.is_some(),
            });
            spec.shapes.extend(arc);
            spec.shapes
                .extend(edges.iter().filter_map(|e| self.aspect_line(chart, e, &wheel)));
        }
        spec.metadata = ChartMetadata { patterns };

        log::debug!(
            "Generated chart spec with {} shapes and {} patterns",
            spec.shapes.len(),
            spec.metadata.patterns.len()
        );
        spec
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            color: self.visual_config.stroke_color,
            width: self.visual_config.stroke_width,
            dash_array: None,
        }
    }

    fn zodiac_shapes(&self, wheel: &Wheel) -> Vec<Shape> {
        let radii = &self.visual_config.radii;
        let mut shapes = vec![
            Shape::Circle {
                center: wheel.center,
                radius: wheel.radius * radii.zodiac_outer,
                fill: None,
                stroke: Some(self.stroke()),
            },
            Shape::Circle {
                center: wheel.center,
                radius: wheel.radius * radii.zodiac_inner,
                fill: None,
                stroke: Some(self.stroke()),
            },
        ];

        for item in build_static_zodiac_items() {
            shapes.push(Shape::SignSegment {
                center: wheel.center,
                sign: item.sign,
                start_angle: angle_for_degree(item.start_lon, wheel.ascendant),
                end_angle: angle_for_degree(item.end_lon, wheel.ascendant),
                radius_inner: wheel.radius * radii.zodiac_inner,
                radius_outer: wheel.radius * radii.zodiac_outer,
                fill: self.visual_config.sign_color(item.sign.index()),
                stroke: Some(self.stroke()),
            });

            let glyph_radius = wheel.radius * (radii.zodiac_inner + radii.zodiac_outer) / 2.0;
            shapes.push(Shape::Text {
                position: wheel.at(item.start_lon + 15.0, glyph_radius),
                content: item.sign.glyph().to_string(),
                size: self.visual_config.glyph_size,
                color: self.visual_config.stroke_color,
                anchor: TextAnchor::Middle,
            });
        }
        shapes
    }

    fn house_shapes(&self, chart: &ChartSnapshot, wheel: &Wheel) -> Vec<Shape> {
        let radii = &self.visual_config.radii;
        let mut shapes = Vec::new();

        for item in build_house_items(chart.house_cusps.as_deref(), chart.ascendant) {
            shapes.push(Shape::Line {
                from: wheel.at(item.lon, wheel.radius * radii.aspects),
                to: wheel.at(item.lon, wheel.radius * radii.zodiac_inner),
                stroke: self.stroke(),
            });
            shapes.push(Shape::Text {
                position: wheel.at(item.mid_lon, wheel.radius * radii.house_numbers),
                content: item.house.to_string(),
                size: self.visual_config.glyph_size * 0.75,
                color: self.visual_config.stroke_color,
                anchor: TextAnchor::Middle,
            });
        }
        shapes
    }

    fn planet_shapes(&self, chart: &ChartSnapshot, wheel: &Wheel) -> Vec<Shape> {
        let cusps = chart
            .house_cusps
            .clone()
            .unwrap_or_else(|| crate::layout::equal_house_cusps(chart.ascendant));
        let radius = wheel.radius * self.visual_config.radii.planets;

        build_planet_items(&chart.bodies, &cusps)
            .into_iter()
            .map(|item| Shape::PlanetGlyph {
                center: wheel.at(item.lon, radius),
                body: item.body,
                glyph: item.body.glyph().to_string(),
                size: self.visual_config.glyph_size,
                color: self.visual_config.planet_color(item.body),
                retrograde: item.retrograde,
            })
            .collect()
    }

    /// Arc over a chart shape's occupied span or a stellium's extent.
    fn highlight_shape(&self, pattern: &Pattern<'_>, wheel: &Wheel) -> Option<Shape> {
        let enabled = match pattern.kind() {
            PatternKind::ChartShape => self.visual_config.draw_chart_shape,
            PatternKind::Stellium => self.visual_config.draw_stelliums,
            _ => false,
        };
        if !enabled {
            return None;
        }

        let span = pattern.span()?;
        let (start_angle, end_angle, large_arc) = if pattern.kind() == PatternKind::ChartShape {
            let plan = plan_arc(span.start_deg, span.end_deg, wheel.ascendant);
            (plan.start_angle, plan.end_angle, plan.large_arc)
        } else {
            let plan = plan_stellium_arc(span.start_deg, span.end_deg, wheel.ascendant);
            (plan.start_angle, plan.end_angle, false)
        };

        Some(Shape::Arc {
            center: wheel.center,
            radius: wheel.radius * self.visual_config.radii.highlight,
            start_angle,
            end_angle,
            large_arc,
            stroke: Stroke {
                color: self.visual_config.highlight_color,
                width: self.visual_config.highlight_width,
                dash_array: None,
            },
        })
    }

    fn aspect_line(&self, chart: &ChartSnapshot, edge: &AspectEdge, wheel: &Wheel) -> Option<Shape> {
        let from_lon = chart.body(edge.from).and_then(|b| b.longitude());
        let to_lon = chart.body(edge.to).and_then(|b| b.longitude());
        let (Some(from_lon), Some(to_lon)) = (from_lon, to_lon) else {
            log::debug!(
                "Skipping {} line {} -> {}: missing degree",
                edge.aspect_type,
                edge.from,
                edge.to
            );
            return None;
        };

        let radius = wheel.radius * self.visual_config.radii.aspects;
        Some(Shape::AspectLine {
            from: wheel.at(from_lon, radius),
            to: wheel.at(to_lon, radius),
            from_body: edge.from,
            to_body: edge.to,
            aspect_type: edge.aspect_type,
            color: self.visual_config.aspect_color(edge.aspect_type),
            width: self.visual_config.aspect_stroke_width,
            style: LineStyle::for_aspect(edge.aspect_type),
        })
    }
}

/// Wheel placement on the canvas for one render pass.
struct Wheel {
    center: Point,
    radius: f64,
    ascendant: f64,
}

impl Wheel {
    fn at(&self, degree: f64, radius: f64) -> Point {
        position_for_degree(degree, self.ascendant, radius, self.center)
    }
}
