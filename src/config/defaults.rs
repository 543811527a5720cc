//! Built-in defaults
//!
//! Hardcoded values for every knob the summary pipeline uses.

/// Built-in default values for report parsing and summary building
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDefaults {
    /// Maximum number of failure details kept (default: 5)
    pub max_failure_details: usize,

    /// Message used when a failure marker has no `message` attribute
    pub missing_message: String,

    /// Type used when a failure marker has no `type` attribute
    pub missing_failure_type: String,

    /// Decimal places kept for the total duration (default: 2)
    pub duration_decimals: u32,

    /// Decimal places kept for the coverage percentage (default: 1)
    pub coverage_decimals: u32,

    /// Decimal places kept for the pass rate (default: 3)
    pub pass_rate_decimals: u32,

    /// Coverage argument meaning "no coverage report" (default: "-")
    pub skip_coverage_sentinel: String,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            max_failure_details: 5,
            missing_message: "No message".to_string(),
            missing_failure_type: "AssertionError".to_string(),
            duration_decimals: 2,
            coverage_decimals: 1,
            pass_rate_decimals: 3,
            skip_coverage_sentinel: "-".to_string(),
        }
    }
}

impl ReportDefaults {
    /// Check whether a coverage argument is the skip sentinel
    pub fn is_skip_coverage(&self, arg: &str) -> bool {
        arg == self.skip_coverage_sentinel
    }
}

/// Round `value` to `decimals` decimal places.
///
/// Rounds the exact binary value, ties to even: `64.25` becomes `64.2`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}
