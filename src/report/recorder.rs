use crate::checker::CheckStatus;
use crate::engine::{FileResult, ResultConsumer};

use super::collection::Suite;
use super::testcase::TestCase;

/// Error type on failures caused by a checker rejecting a file.
pub const SYNTAX_ERROR_TYPE: &str = "syntax";

/// Adapts engine results into test cases of one suite.
///
/// The file path becomes the classname and the format the case name.
/// Files no rule matched are recorded as skipped.
pub struct SuiteRecorder {
    suite: Suite,
}

impl SuiteRecorder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            suite: Suite::new(name),
        }
    }

    #[must_use]
    pub const fn suite(&self) -> &Suite {
        &self.suite
    }

    #[must_use]
    pub fn into_suite(self) -> Suite {
        self.suite
    }

    fn to_case(result: &FileResult) -> Option<TestCase> {
        let mut case = TestCase::new(result.path.display().to_string())
            .ok()?
            .with_duration(result.elapsed);
        if let Some(format) = &result.format {
            case = case.with_description(format.clone());
        }

        let outcome = &result.outcome;
        match outcome.status {
            CheckStatus::Passed => case.passed(outcome.output.clone(), None),
            CheckStatus::Failed => case.failed(
                Some(SYNTAX_ERROR_TYPE),
                outcome.output.clone(),
                outcome.diagnostic.clone(),
            ),
            CheckStatus::Skipped | CheckStatus::Uncomputed => case.skip(),
        }
        Some(case)
    }
}

impl ResultConsumer for SuiteRecorder {
    fn consume(&mut self, result: &FileResult) {
        match Self::to_case(result) {
            Some(case) => {
                self.suite.add_case(case);
            }
            None => tracing::warn!(path = %result.path.display(), "result has no usable classname"),
        }
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
