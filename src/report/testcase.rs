use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::error::{Result, SyntaxGuardError};

/// Error type recorded when a case fails without one.
pub const UNSPECIFIED_ERROR_TYPE: &str = "unspecified";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestStatus {
    #[default]
    Pending,
    Passed,
    Failed,
    Skipped,
}

/// A single result in a report suite.
///
/// Cases start `Pending`. `passed`, `failed` and `skip` each set the status
/// outright; the last call wins. Clones share the identity of the original,
/// so a suite will not accept both.
#[derive(Debug, Clone)]
pub struct TestCase {
    id: u64,
    classname: String,
    description: Option<String>,
    duration: Option<Duration>,
    status: TestStatus,
    error_type: Option<String>,
    output: Option<String>,
    errors: Option<String>,
    started: Option<Instant>,
}

impl TestCase {
    /// # Errors
    /// Returns an error if `classname` is blank.
    pub fn new(classname: impl Into<String>) -> Result<Self> {
        let classname = classname.into();
        if classname.trim().is_empty() {
            return Err(SyntaxGuardError::Report(
                "test case classname must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            classname,
            description: None,
            duration: None,
            status: TestStatus::Pending,
            error_type: None,
            output: None,
            errors: None,
            started: None,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub const fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Marks the case passed. `None` keeps previously captured text.
    pub fn passed(&mut self, output: Option<String>, errors: Option<String>) {
        self.status = TestStatus::Passed;
        self.capture(output, errors);
    }

    /// Marks the case failed. `None` keeps previously captured text.
    pub fn failed(&mut self, error_type: Option<&str>, output: Option<String>, errors: Option<String>) {
        self.status = TestStatus::Failed;
        self.error_type = Some(error_type.unwrap_or(UNSPECIFIED_ERROR_TYPE).to_string());
        self.capture(output, errors);
    }

    fn capture(&mut self, output: Option<String>, errors: Option<String>) {
        if let Some(output) = output {
            self.output = Some(output);
        }
        if let Some(errors) = errors {
            self.errors = Some(errors);
        }
    }

    pub const fn skip(&mut self) {
        self.status = TestStatus::Skipped;
    }

    /// Starts timing. A later [`finish`](Self::finish) stores the elapsed
    /// wall-clock time as the duration.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops timing. Without a matching `start` the duration is unchanged.
    pub fn finish(&mut self) {
        if let Some(started) = self.started.take() {
            self.duration = Some(started.elapsed());
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn classname(&self) -> &str {
        &self.classname
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub const fn status(&self) -> TestStatus {
        self.status
    }

    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    #[must_use]
    pub fn errors(&self) -> Option<&str> {
        self.errors.as_deref()
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, TestStatus::Failed)
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.status, TestStatus::Skipped)
    }
}

#[cfg(test)]
#[path = "testcase_tests.rs"]
mod tests;
