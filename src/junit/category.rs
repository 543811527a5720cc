//! Test case categories derived from the `classname` attribute

use serde::{Deserialize, Serialize};

/// Category a test case falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestCategory {
    Unit,
    Integration,
    E2e,
    Other,
}

impl TestCategory {
    /// Classify a test case by its class name.
    ///
    /// Matching is a case-insensitive substring search, first match wins:
    /// `unit`, then `integration`, then `e2e` / `end_to_end`, else `Other`.
    pub fn classify(classname: &str) -> Self {
        let lowered = classname.to_lowercase();
        if lowered.contains("unit") {
            TestCategory::Unit
        } else if lowered.contains("integration") {
            TestCategory::Integration
        } else if lowered.contains("e2e") || lowered.contains("end_to_end") {
            TestCategory::E2e
        } else {
            TestCategory::Other
        }
    }
}

/// Per-category test case counts
///
/// Serializes as an object with the fixed key order
/// `unit`, `integration`, `e2e`, `other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub unit: u64,
    pub integration: u64,
    pub e2e: u64,
    pub other: u64,
}

impl CategoryCounts {
    /// Count one test case in `category`
    pub fn record(&mut self, category: TestCategory) {
        *self.slot_mut(category) += 1;
    }

    /// Count for a single category
    pub fn get(&self, category: TestCategory) -> u64 {
        match category {
            TestCategory::Unit => self.unit,
            TestCategory::Integration => self.integration,
            TestCategory::E2e => self.e2e,
            TestCategory::Other => self.other,
        }
    }

    /// Number of test cases classified
    pub fn total(&self) -> u64 {
        self.unit + self.integration + self.e2e + self.other
    }

    fn slot_mut(&mut self, category: TestCategory) -> &mut u64 {
        match category {
            TestCategory::Unit => &mut self.unit,
            TestCategory::Integration => &mut self.integration,
            TestCategory::E2e => &mut self.e2e,
            TestCategory::Other => &mut self.other,
        }
    }
}
