use super::*;

fn result(status: CheckStatus) -> FileResult {
    let outcome = match status {
        CheckStatus::Passed => CheckOutcome::passed(),
        CheckStatus::Failed => CheckOutcome::failed("boom"),
        CheckStatus::Skipped => CheckOutcome::skipped(),
        CheckStatus::Uncomputed => CheckOutcome::uncomputed(),
    };
    FileResult {
        path: PathBuf::from("a.py"),
        format: Some("python".to_string()),
        outcome,
        elapsed: Duration::ZERO,
    }
}

#[test]
fn summary_records_each_status() {
    let mut summary = WalkSummary::default();
    summary.record(CheckStatus::Passed);
    summary.record(CheckStatus::Passed);
    summary.record(CheckStatus::Failed);
    summary.record(CheckStatus::Skipped);
    summary.record(CheckStatus::Uncomputed);

    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.uncomputed, 1);
    assert_eq!(summary.outcomes(), 5);
    assert!(summary.has_failures());
}

#[test]
fn merge_adds_counts() {
    let mut total = WalkSummary {
        files: 3,
        passed: 2,
        ..WalkSummary::default()
    };
    total.merge(&WalkSummary {
        files: 2,
        failed: 1,
        skipped: 1,
        ..WalkSummary::default()
    });

    assert_eq!(total.files, 5);
    assert_eq!(total.passed, 2);
    assert_eq!(total.failed, 1);
    assert_eq!(total.skipped, 1);
}

#[test]
fn closures_are_consumers() {
    let mut seen = Vec::new();
    let mut consumer = |r: &FileResult| seen.push(r.status());

    consumer.consume(&result(CheckStatus::Failed));
    consumer.consume(&result(CheckStatus::Passed));

    assert_eq!(seen, vec![CheckStatus::Failed, CheckStatus::Passed]);
}

#[test]
fn accessors_expose_outcome() {
    let failed = result(CheckStatus::Failed);
    assert_eq!(failed.path(), Path::new("a.py"));
    assert_eq!(failed.diagnostic(), "boom");
    assert_eq!(result(CheckStatus::Passed).diagnostic(), "");
}
