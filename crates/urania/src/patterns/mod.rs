//! Aspect patterns and their projection into drawable aspect edges.
//!
//! Patterns arrive either as structured records or, from older chart
//! payloads, as free-text descriptions. Both forms are normalized into a
//! single [`Pattern`] that borrows the snapshot's bodies; only that form is
//! ever handed to [`derive_lines`].

pub mod derive;
pub mod input;
pub mod legacy;
pub mod types;

pub use derive::derive_lines;
pub use input::{LegacyPattern, PatternInput, PatternRecord};
pub use types::{Pattern, PatternKind, Role};
