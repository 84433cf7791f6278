//! Turns a before/after [PerformanceRecord] into a Slack report.
//!
//! See [builder::build_blocks].

pub mod builder;
pub mod format;
pub mod record;
mod sample;

pub use builder::{build_blocks, fallback_text};
pub use record::PerformanceRecord;
