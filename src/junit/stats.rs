//! Normalized test statistics

use serde::{Deserialize, Serialize};

use super::category::CategoryCounts;
use crate::config::{round_to, ReportDefaults};

/// One failed test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    /// `classname.name` of the test case
    pub test: String,

    /// Failure message
    pub message: String,

    /// Failure type label
    #[serde(rename = "type")]
    pub failure_type: String,
}

/// Suite-level counters summed from `testsuite` attributes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SuiteTotals {
    pub tests: i64,
    pub failures: i64,
    pub errors: i64,
    pub skipped: i64,
    pub time: f64,
}

impl SuiteTotals {
    /// Add another suite's counters, `None` if a count overflows
    pub fn checked_add(&self, other: &SuiteTotals) -> Option<SuiteTotals> {
        Some(SuiteTotals {
            tests: self.tests.checked_add(other.tests)?,
            failures: self.failures.checked_add(other.failures)?,
            errors: self.errors.checked_add(other.errors)?,
            skipped: self.skipped.checked_add(other.skipped)?,
            time: self.time + other.time,
        })
    }
}

/// Statistics extracted from one JUnit report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestStatistics {
    /// Total tests reported by the suites
    pub total: i64,

    /// `total - failures - errors - skipped`; negative for inconsistent reports
    pub passed: i64,

    /// Failures and errors together
    pub failed: i64,

    /// Skipped tests
    pub skipped: i64,

    /// Total duration in seconds
    pub duration: f64,

    /// Test cases per category
    pub categories: CategoryCounts,

    /// First few failed test cases, `None` when there are none
    pub failures: Option<Vec<FailureDetail>>,
}

impl TestStatistics {
    /// Build statistics from summed suite counters and the per-case walk.
    ///
    /// Returns `None` when deriving `passed` or `failed` overflows.
    pub fn from_parts(
        totals: SuiteTotals,
        categories: CategoryCounts,
        failures: Vec<FailureDetail>,
        defaults: &ReportDefaults,
    ) -> Option<Self> {
        let passed = totals
            .tests
            .checked_sub(totals.failures)?
            .checked_sub(totals.errors)?
            .checked_sub(totals.skipped)?;
        let failed = totals.failures.checked_add(totals.errors)?;

        Some(Self {
            total: totals.tests,
            passed,
            failed,
            skipped: totals.skipped,
            duration: round_to(totals.time, defaults.duration_decimals),
            categories,
            failures: if failures.is_empty() {
                None
            } else {
                Some(failures)
            },
        })
    }

    /// Whether no test failed or errored
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// `passed / total` rounded to `decimals`, or `None` when there are no tests
    pub fn pass_rate(&self, decimals: u32) -> Option<f64> {
        if self.total > 0 {
            Some(round_to(self.passed as f64 / self.total as f64, decimals))
        } else {
            None
        }
    }
}
