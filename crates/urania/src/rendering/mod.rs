pub mod arc;
pub mod generator;
pub mod primitives;
pub mod spec;
pub mod visual_config;

pub use arc::{plan_arc, plan_stellium_arc, ArcPlan, StelliumArc};
pub use generator::ChartSpecGenerator;
pub use primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
pub use spec::{ChartMetadata, ChartSpec, PatternMetadata};
pub use visual_config::{RingRadii, VisualConfig};
