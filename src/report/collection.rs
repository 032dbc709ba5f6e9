use chrono::{DateTime, Local};

use crate::error::Result;

use super::testcase::TestCase;
use super::xml;

/// A named, ordered group of test cases.
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    timestamp: DateTime<Local>,
    cases: Vec<TestCase>,
}

impl Suite {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: Local::now(),
            cases: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Creates a case and appends it.
    ///
    /// # Errors
    /// Returns an error if `classname` is blank.
    pub fn create_case(&mut self, classname: impl Into<String>) -> Result<&mut TestCase> {
        let case = TestCase::new(classname)?;
        self.cases.push(case);
        let last = self.cases.len() - 1;
        Ok(&mut self.cases[last])
    }

    /// Appends `case` unless a case with the same identity is already
    /// present. Returns whether it was added.
    pub fn add_case(&mut self, case: TestCase) -> bool {
        if self.cases.iter().any(|existing| existing.id() == case.id()) {
            return false;
        }
        self.cases.push(case);
        true
    }

    #[must_use]
    pub fn tests(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.cases.iter().filter(|case| case.is_failed()).count()
    }
}

/// Aggregation root for one run: an ordered list of suites.
///
/// Owned by the caller and passed to whatever records results. `reset`
/// empties it between test runs.
#[derive(Debug, Clone, Default)]
pub struct ReportCollection {
    suites: Vec<Suite>,
}

impl ReportCollection {
    #[must_use]
    pub const fn new() -> Self {
        Self { suites: Vec::new() }
    }

    /// Appends a new empty suite and returns it.
    pub fn create_suite(&mut self, name: impl Into<String>) -> &mut Suite {
        self.suites.push(Suite::new(name));
        let last = self.suites.len() - 1;
        &mut self.suites[last]
    }

    /// Appends an already populated suite.
    pub fn push_suite(&mut self, suite: Suite) {
        self.suites.push(suite);
    }

    #[must_use]
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn reset(&mut self) {
        self.suites.clear();
    }

    /// Serializes every suite as a JUnit XML document.
    #[must_use]
    pub fn to_markup(&self) -> String {
        xml::render(&self.suites)
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
