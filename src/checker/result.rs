use std::fmt;

use serde::Serialize;

/// Status of one file checked against one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
    /// No format rule matched the file. Only surfaced in report-all mode.
    Uncomputed,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Uncomputed => "uncomputed",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking one file against one format.
///
/// `diagnostic` is the parser or tool error text and is only set for
/// failures (and for skips caused by a tool that could not finish).
/// `output` keeps whatever a tool printed on a successful run, e.g. ruby's
/// "Syntax OK". `advisory` is a side-channel message for the operator and is
/// never delivered to result consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub diagnostic: Option<String>,
    pub output: Option<String>,
    pub advisory: Option<String>,
}

impl CheckOutcome {
    const fn with_status(status: CheckStatus) -> Self {
        Self {
            status,
            diagnostic: None,
            output: None,
            advisory: None,
        }
    }

    #[must_use]
    pub const fn passed() -> Self {
        Self::with_status(CheckStatus::Passed)
    }

    #[must_use]
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            diagnostic: Some(diagnostic.into()),
            ..Self::with_status(CheckStatus::Failed)
        }
    }

    #[must_use]
    pub const fn skipped() -> Self {
        Self::with_status(CheckStatus::Skipped)
    }

    #[must_use]
    pub const fn uncomputed() -> Self {
        Self::with_status(CheckStatus::Uncomputed)
    }

    /// Attach captured tool output; blank output is dropped.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        let output = output.into();
        if !output.trim().is_empty() {
            self.output = Some(output);
        }
        self
    }

    #[must_use]
    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }

    #[must_use]
    pub fn with_advisory(mut self, advisory: impl Into<String>) -> Self {
        self.advisory = Some(advisory.into());
        self
    }

    /// Diagnostic text, empty when there is none.
    #[must_use]
    pub fn diagnostic_text(&self) -> &str {
        self.diagnostic.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Failed)
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.status, CheckStatus::Skipped)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
