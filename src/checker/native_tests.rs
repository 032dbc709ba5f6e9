use std::fs;

use tempfile::TempDir;

use super::*;

fn write(temp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn valid_json_passes_with_empty_diagnostic() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "ok.json", r#"{"name": "demo", "tags": [1, 2, 3]}"#);

    let outcome = JsonChecker.check(&path);

    assert!(outcome.is_passed());
    assert_eq!(outcome.diagnostic_text(), "");
}

#[test]
fn empty_object_is_valid_json() {
    assert!(JsonChecker::parse(b"{}").is_ok());
}

#[test]
fn truncated_json_fails_with_message() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "bad.json", "{");

    let outcome = JsonChecker.check(&path);

    assert!(outcome.is_failed());
    assert!(!outcome.diagnostic_text().is_empty());
}

#[test]
fn trailing_garbage_is_invalid_json() {
    let err = JsonChecker::parse(b"{} {}").unwrap_err();
    assert!(err.contains("trailing"));
}

#[test]
fn valid_yaml_passes() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "ok.yaml", "---\nname: demo\nitems:\n  - a\n  - b\n");

    let outcome = YamlChecker.check(&path);

    assert!(outcome.is_passed());
    assert_eq!(outcome.diagnostic_text(), "");
}

#[test]
fn multi_document_yaml_checks_every_document() {
    assert!(YamlChecker::parse(b"---\na: 1\n---\nb: 2\n").is_ok());
    assert!(YamlChecker::parse(b"---\na: 1\n---\nb: [1, 2\n").is_err());
}

#[test]
fn duplicate_yaml_keys_still_parse() {
    assert!(YamlChecker::parse(b"a: 1\na: 2\n").is_ok());
}

#[test]
fn unclosed_yaml_quote_fails() {
    assert!(YamlChecker::parse(b"key: \"open\n").is_err());
}

#[test]
fn invalid_yaml_fails_with_message() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "bad.yml", "key: [unclosed\nother: value\n");

    let outcome = YamlChecker.check(&path);

    assert!(outcome.is_failed());
    assert!(!outcome.diagnostic_text().is_empty());
}

#[test]
fn unreadable_file_is_a_per_file_failure() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone.json");

    let outcome = JsonChecker.check(&missing);

    assert!(outcome.is_failed());
    assert!(outcome.diagnostic_text().contains("cannot read file"));
}

#[test]
fn native_checkers_are_always_available() {
    assert_eq!(JsonChecker.availability(), Availability::Native);
    assert_eq!(YamlChecker.availability(), Availability::Native);
}
