use std::path::PathBuf;
use std::time::Duration;

use super::*;
use crate::checker::CheckOutcome;

fn result(path: &str, outcome: CheckOutcome) -> FileResult {
    FileResult {
        path: PathBuf::from(path),
        format: Some("json".to_string()),
        outcome,
        elapsed: Duration::from_millis(12),
    }
}

#[test]
fn renders_summary_and_results_in_order() {
    let mut reporter = JsonReporter::new();
    reporter.consume(&result("c.json", CheckOutcome::passed()));
    reporter.consume(&result("d.json", CheckOutcome::failed("EOF while parsing")));

    let summary = WalkSummary {
        files: 2,
        passed: 1,
        failed: 1,
        ..WalkSummary::default()
    };
    let parsed: serde_json::Value =
        serde_json::from_str(&reporter.render(&summary).unwrap()).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 2);
    assert_eq!(parsed["summary"]["failed"], 1);
    assert_eq!(parsed["results"][0]["path"], "c.json");
    assert_eq!(parsed["results"][0]["status"], "passed");
    assert!(parsed["results"][0].get("diagnostic").is_none());
    assert_eq!(parsed["results"][1]["status"], "failed");
    assert_eq!(parsed["results"][1]["diagnostic"], "EOF while parsing");
    assert_eq!(parsed["results"][1]["elapsed_ms"], 12);
}

#[test]
fn empty_reporter_renders_empty_results() {
    let parsed: serde_json::Value = serde_json::from_str(
        &JsonReporter::new()
            .render(&WalkSummary::default())
            .unwrap(),
    )
    .unwrap();

    assert_eq!(parsed["results"].as_array().unwrap().len(), 0);
    assert_eq!(parsed["summary"]["passed"], 0);
}
