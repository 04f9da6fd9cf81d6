pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod geometry;
pub mod layout;
pub mod patterns;
pub mod rendering;
pub mod session;
pub mod span;

pub use aspects::{AspectEdge, AspectType};
pub use bodies::{Body, CelestialBody, Sign};
pub use chart::{load_chart_from_json, ChartInputError, ChartSnapshot};
pub use geometry::{angle_for_degree, normalize_degrees, position_for_degree};
pub use patterns::{derive_lines, Pattern, PatternInput, PatternRecord};
pub use rendering::{ChartSpec, ChartSpecGenerator, Point, VisualConfig};
pub use session::ChartSession;
pub use span::{occupied_span, stellium_span, stellium_span_circular, AngularSpan};
