//! Coverage JSON report parsing
//!
//! Extracts the overall coverage percentage from coverage.py-style JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

use crate::config::{round_to, ReportDefaults};

/// Locations searched for the overall percentage, first hit wins
const PERCENT_LOCATIONS: &[(&str, &str)] = &[
    ("totals", "percent_covered"),
    // Alternate shape emitted by some tool versions
    ("summary", "percent_covered"),
];

/// Error types for coverage parsing
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("Failed to read coverage report: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Coverage section of the summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageInfo {
    /// Whether a coverage percentage was found
    pub enabled: bool,

    /// Overall percentage (0-100), `null` when disabled
    pub percentage: Option<f64>,
}

impl CoverageInfo {
    /// Coverage section for when no report was available
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            percentage: None,
        }
    }

    /// Build from an optional raw percentage
    pub fn from_percent(percent: Option<f64>, defaults: &ReportDefaults) -> Self {
        match percent {
            Some(p) => Self {
                enabled: true,
                percentage: Some(round_to(p, defaults.coverage_decimals)),
            },
            None => Self::disabled(),
        }
    }
}

/// Find the overall percentage in a parsed coverage document
pub fn find_percent_covered(doc: &Value) -> Option<f64> {
    PERCENT_LOCATIONS
        .iter()
        .find_map(|(section, key)| doc.get(section)?.get(key)?.as_f64())
}

/// Parse coverage JSON held in memory
pub fn parse_coverage_str(json: &str) -> Result<Option<f64>, CoverageError> {
    let doc: Value = serde_json::from_str(json)?;
    Ok(find_percent_covered(&doc))
}

/// Parse a coverage report from disk
pub fn parse_coverage_file(path: &Path) -> Result<Option<f64>, CoverageError> {
    let json = fs::read_to_string(path)?;
    parse_coverage_str(&json)
}

/// Parse a coverage report, logging and swallowing any error.
///
/// Returns `None` when the report is unreadable or holds no percentage.
pub fn load_coverage(path: &Path) -> Option<f64> {
    match parse_coverage_file(path) {
        Ok(Some(percent)) => {
            tracing::debug!(path = %path.display(), percent, "Parsed coverage JSON");
            Some(percent)
        }
        Ok(None) => {
            tracing::warn!(
                path = %path.display(),
                "Coverage JSON has no totals.percent_covered or summary.percent_covered"
            );
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "Error parsing coverage JSON: {}", e);
            None
        }
    }
}
