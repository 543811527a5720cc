//! Built-in report defaults
//!
//! Caps, placeholder strings and rounding precision shared by the
//! parsers and the summary builder.

mod defaults;

pub use defaults::{round_to, ReportDefaults};
