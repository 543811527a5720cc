//! JUnit XML report parsing
//!
//! Reads a JUnit-style test report (a `<testsuites>` collection or a single
//! `<testsuite>` root) and condenses it into [`TestStatistics`].

mod category;
mod parser;
mod stats;

pub use category::{CategoryCounts, TestCategory};
pub use parser::{load_test_statistics, parse_junit_file, parse_junit_str, JunitError};
pub use stats::{FailureDetail, TestStatistics};
