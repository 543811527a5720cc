//! Combined test summary

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::ReportDefaults;
use crate::coverage::{load_coverage, CoverageInfo};
use crate::junit::{load_test_statistics, TestStatistics};

/// Error types for summary persistence
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Failed to write summary to {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read summary: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Test summary document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    /// JUnit statistics, `{}` when the report could not be parsed
    #[serde(
        serialize_with = "serialize_tests",
        deserialize_with = "deserialize_tests"
    )]
    pub tests: Option<TestStatistics>,

    /// Coverage section
    pub coverage: CoverageInfo,

    /// True iff statistics are available and nothing failed
    pub success: bool,

    /// `passed / total`, omitted when there are no tests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_rate: Option<f64>,
}

impl TestSummary {
    /// Merge statistics and an optional coverage percentage
    pub fn build(
        tests: Option<TestStatistics>,
        coverage_percent: Option<f64>,
        defaults: &ReportDefaults,
    ) -> Self {
        let success = tests.as_ref().is_some_and(TestStatistics::all_passed);
        let pass_rate = tests
            .as_ref()
            .and_then(|stats| stats.pass_rate(defaults.pass_rate_decimals));

        Self {
            tests,
            coverage: CoverageInfo::from_percent(coverage_percent, defaults),
            success,
            pass_rate,
        }
    }

    /// Serialize to JSON (2-space indent)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Write to file, replacing any existing content
    pub fn write_to_file(&self, path: &Path) -> Result<(), SummaryError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SummaryError::WriteError {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from file
    pub fn from_file(path: &Path) -> Result<Self, SummaryError> {
        let json = fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }
}

/// Run the whole pipeline: parse both reports, merge, write `output_path`.
///
/// A coverage path that does not exist counts as "no coverage" without a
/// diagnostic. Parse failures in either report are logged and degrade the
/// summary instead of failing it.
pub fn generate_summary(
    junit_path: &Path,
    coverage_path: Option<&Path>,
    output_path: &Path,
    defaults: &ReportDefaults,
) -> Result<TestSummary, SummaryError> {
    let tests = load_test_statistics(junit_path, defaults);

    let coverage_percent = match coverage_path {
        Some(path) if path.exists() => load_coverage(path),
        Some(path) => {
            tracing::debug!(path = %path.display(), "Coverage report not found, skipping");
            None
        }
        None => None,
    };

    let summary = TestSummary::build(tests, coverage_percent, defaults);
    summary.write_to_file(output_path)?;
    tracing::info!(
        path = %output_path.display(),
        success = summary.success,
        "Wrote test summary"
    );

    Ok(summary)
}

fn serialize_tests<S>(tests: &Option<TestStatistics>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match tests {
        Some(stats) => stats.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

fn deserialize_tests<'de, D>(deserializer: D) -> Result<Option<TestStatistics>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
