pub mod types;

pub use types::{AspectEdge, AspectType};
