//! Test Summary - condensed view of a test run
//!
//! This crate turns a JUnit-style XML test report and an optional coverage
//! JSON report into one normalized summary JSON document for downstream
//! review tooling.

pub mod config;
pub mod coverage;
pub mod junit;
pub mod summary;

pub use config::ReportDefaults;
pub use coverage::CoverageInfo;
pub use junit::{FailureDetail, TestCategory, TestStatistics};
pub use summary::{generate_summary, TestSummary};
