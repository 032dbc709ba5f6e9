use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checker::{CheckOutcome, CheckStatus};

/// One outcome delivered to a [`ResultConsumer`].
///
/// `format` is `None` only for files no rule matched (report-all mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub format: Option<String>,
    pub outcome: CheckOutcome,
    /// Wall-clock time spent in the checker.
    pub elapsed: Duration,
}

impl FileResult {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn status(&self) -> CheckStatus {
        self.outcome.status
    }

    #[must_use]
    pub fn diagnostic(&self) -> &str {
        self.outcome.diagnostic_text()
    }
}

/// Receives outcomes one at a time, in traversal order.
pub trait ResultConsumer {
    fn consume(&mut self, result: &FileResult);
}

impl<F: FnMut(&FileResult)> ResultConsumer for F {
    fn consume(&mut self, result: &FileResult) {
        self(result);
    }
}

/// Totals for one or more walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Regular files visited, classified or not.
    pub files: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub uncomputed: usize,
}

impl WalkSummary {
    pub const fn record(&mut self, status: CheckStatus) {
        match status {
            CheckStatus::Passed => self.passed += 1,
            CheckStatus::Failed => self.failed += 1,
            CheckStatus::Skipped => self.skipped += 1,
            CheckStatus::Uncomputed => self.uncomputed += 1,
        }
    }

    /// Number of outcomes delivered.
    #[must_use]
    pub const fn outcomes(&self) -> usize {
        self.passed + self.failed + self.skipped + self.uncomputed
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub const fn merge(&mut self, other: &Self) {
        self.files += other.files;
        self.passed += other.passed;
        self.failed += other.failed;
        self.skipped += other.skipped;
        self.uncomputed += other.uncomputed;
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
