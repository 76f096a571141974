//! Assignment reporting.
//!
//! Summarizes how well a run honored student preferences and renders
//! the result as text. Reads the ledgers only.

mod chart;
mod stats;

pub use chart::render_chart;
pub use stats::{Placement, PreferenceReport};
