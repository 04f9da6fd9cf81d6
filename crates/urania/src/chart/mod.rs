pub mod loader;
pub mod snapshot;

pub use loader::{load_chart_from_json, ChartInputError};
pub use snapshot::ChartSnapshot;
