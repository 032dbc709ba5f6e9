use serde::Serialize;

use crate::engine::{FileResult, ResultConsumer, WalkSummary};
use crate::error::Result;

/// Collects outcomes and renders them as one JSON document.
#[derive(Debug, Default)]
pub struct JsonReporter {
    results: Vec<JsonResult>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: &'a [JsonResult],
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
    uncomputed: usize,
}

#[derive(Debug, Serialize)]
struct JsonResult {
    path: String,
    format: Option<String>,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    elapsed_ms: u64,
}

impl JsonReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn render(&self, summary: &WalkSummary) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: summary.files,
                passed: summary.passed,
                failed: summary.failed,
                skipped: summary.skipped,
                uncomputed: summary.uncomputed,
            },
            results: &self.results,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl ResultConsumer for JsonReporter {
    fn consume(&mut self, result: &FileResult) {
        self.results.push(JsonResult {
            path: result.path.display().to_string(),
            format: result.format.clone(),
            status: result.status().to_string(),
            diagnostic: result.outcome.diagnostic.clone(),
            output: result.outcome.output.clone(),
            elapsed_ms: u64::try_from(result.elapsed.as_millis()).unwrap_or(u64::MAX),
        });
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
