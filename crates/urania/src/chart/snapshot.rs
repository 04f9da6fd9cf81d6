use crate::aspects::AspectEdge;
use crate::bodies::{Body, CelestialBody};
use crate::patterns::{Pattern, PatternInput};
use serde::Deserialize;

/// One chart as fetched from the chart service. Read-only for the lifetime of
/// a render; replaced wholesale when the user loads another chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub bodies: Vec<CelestialBody>,
    /// Ascendant longitude; drives the wheel rotation.
    pub ascendant: f64,
    /// Cusps of houses 1-12. Equal houses from the ascendant when absent.
    #[serde(default)]
    pub house_cusps: Option<Vec<f64>>,
    #[serde(default)]
    pub patterns: Vec<PatternInput>,
}

impl ChartSnapshot {
    pub fn new(bodies: Vec<CelestialBody>, ascendant: f64) -> Self {
        Self {
            bodies,
            ascendant,
            house_cusps: None,
            patterns: Vec::new(),
        }
    }

    pub fn with_patterns(mut self, patterns: Vec<PatternInput>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn body(&self, name: Body) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Patterns normalized against this snapshot's bodies.
    ///
    /// Legacy text patterns are skipped unless `accept_legacy` is set.
    pub fn resolved_patterns(&self, accept_legacy: bool) -> Vec<Pattern<'_>> {
        self.patterns
            .iter()
            .filter(|input| accept_legacy || !input.is_legacy())
            .filter_map(|input| input.resolve(&self.bodies))
            .collect()
    }

    /// Every aspect edge of every pattern, in pattern order.
    pub fn edges(&self, accept_legacy: bool) -> Vec<AspectEdge> {
        self.resolved_patterns(accept_legacy)
            .iter()
            .flat_map(Pattern::edges)
            .collect()
    }
}
