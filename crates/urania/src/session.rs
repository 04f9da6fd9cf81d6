//! Per-session chart context.
//!
//! A `ChartSession` is created when a user session starts, threaded through
//! whatever drives rendering, and reset when the session ends. It owns the
//! current snapshot and memoizes the last rendered spec, so re-rendering with
//! unchanged bodies, ascendant, patterns and canvas size does no trigonometry.

use crate::chart::ChartSnapshot;
use crate::patterns::PatternInput;
use crate::rendering::{ChartSpec, ChartSpecGenerator};

#[derive(Debug, Clone)]
struct CachedSpec {
    revision: u64,
    width: f64,
    height: f64,
    spec: ChartSpec,
}

#[derive(Debug, Default)]
pub struct ChartSession {
    generator: ChartSpecGenerator,
    chart: Option<ChartSnapshot>,
    /// Bumped on every input change; the cache is valid only for the revision
    /// it was built from.
    revision: u64,
    cache: Option<CachedSpec>,
}

impl ChartSession {
    pub fn new(generator: ChartSpecGenerator) -> Self {
        Self {
            generator,
            chart: None,
            revision: 0,
            cache: None,
        }
    }

    pub fn chart(&self) -> Option<&ChartSnapshot> {
        self.chart.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the current chart.
    pub fn load(&mut self, chart: ChartSnapshot) {
        self.chart = Some(chart);
        self.touch();
    }

    /// Change the wheel rotation. No-op without a chart.
    pub fn set_ascendant(&mut self, ascendant: f64) {
        if let Some(chart) = self.chart.as_mut() {
            if chart.ascendant != ascendant {
                chart.ascendant = ascendant;
                self.touch();
            }
        }
    }

    /// Replace the pattern set. No-op without a chart.
    pub fn set_patterns(&mut self, patterns: Vec<PatternInput>) {
        if let Some(chart) = self.chart.as_mut() {
            chart.patterns = patterns;
            self.touch();
        }
    }

    /// Drop the chart and cached render; called when the session ends.
    pub fn reset(&mut self) {
        log::debug!("Resetting chart session at revision {}", self.revision);
        self.chart = None;
        self.cache = None;
        self.revision = 0;
    }

    /// Render the current chart, reusing the previous spec when nothing changed.
    pub fn render(&mut self, width: f64, height: f64) -> Option<&ChartSpec> {
        let chart = self.chart.as_ref()?;

        let fresh = self.cache.as_ref().map_or(false, |c| {
            c.revision == self.revision && c.width == width && c.height == height
        });
        if !fresh {
            log::debug!("Rendering chart revision {} at {}x{}", self.revision, width, height);
            self.cache = Some(CachedSpec {
                revision: self.revision,
                width,
                height,
                spec: self.generator.generate(chart, width, height),
            });
        }

        self.cache.as_ref().map(|c| &c.spec)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
