//! Human-readable rendering of audit results.
//!
//! The sampling core returns structured data only; everything about
//! presentation — the per-bucket table, deviation lines, SI-prefixed
//! magnitudes — lives here, consumed by the CLI binary and usable by any
//! other front end.

pub mod render;

pub use render::{format_si, render_report};
