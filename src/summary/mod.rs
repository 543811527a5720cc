//! Test summary (summary JSON)
//!
//! Merges JUnit statistics and coverage into one record and persists it.

mod test_summary;

pub use test_summary::{generate_summary, SummaryError, TestSummary};
