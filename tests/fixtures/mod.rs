//! Report fixtures shared by the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Directory holding the JUnit and coverage fixture reports
pub fn reports_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/reports")
}

/// Path to a named fixture report
pub fn report(name: &str) -> PathBuf {
    reports_dir().join(name)
}
