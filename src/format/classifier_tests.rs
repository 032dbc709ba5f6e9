use std::fs;

use tempfile::TempDir;

use super::*;
use crate::format::{FormatRegistry, BUILTIN_FORMATS, JSON, PYTHON, SHELL, YAML};

fn builtin(name: &str) -> FormatRule {
    FormatRegistry::default().get(name).unwrap().clone()
}

#[test]
fn every_builtin_extension_classifies_without_reading() {
    let registry = FormatRegistry::default();
    for rule in registry.all() {
        for ext in &rule.extensions {
            // The file does not exist: only the suffix is consulted.
            let path = Path::new("does-not-exist").join(format!("foo{ext}"));
            assert!(matches(&path, rule), "{} should match {ext}", rule.name);
        }
    }
}

#[test]
fn foreign_extension_does_not_classify() {
    let registry = FormatRegistry::default();
    for rule in registry.all() {
        assert!(!matches(Path::new("foo.qzxvbnmw"), rule), "{}", rule.name);
    }
}

#[test]
fn extension_dominates_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("script.py");
    fs::write(&path, "#!/usr/bin/env ruby\nputs 1\n").unwrap();

    assert!(matches(&path, &builtin(PYTHON)));
}

#[test]
fn env_shebang_classifies_external_formats() {
    let temp = TempDir::new().unwrap();
    for (name, interpreter) in [
        ("puppet", "puppet"),
        ("erb", "erb"),
        ("python", "python"),
        ("ruby", "ruby"),
        ("perl", "perl"),
        ("shell", "bash"),
    ] {
        let path = temp.path().join(format!("{name}-script"));
        fs::write(&path, format!("#!/usr/bin/env {interpreter}\n")).unwrap();
        assert!(matches(&path, &builtin(name)), "{name} via env");
    }
}

#[test]
fn direct_shebang_classifies_external_formats() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("runner");
    fs::write(&path, "#!/bash\necho hi\n").unwrap();

    assert!(matches(&path, &builtin(SHELL)));
}

#[test]
fn shebang_without_slash_does_not_classify() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("runner");
    fs::write(&path, "#! python\nprint(1)\n").unwrap();

    assert!(!matches(&path, &builtin(PYTHON)));
}

#[test]
fn shebang_must_be_on_first_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("runner");
    fs::write(&path, "\n#!/usr/bin/env python\n").unwrap();

    assert!(!matches(&path, &builtin(PYTHON)));
}

#[test]
fn zero_byte_file_never_classifies_by_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty");
    fs::write(&path, "").unwrap();

    let registry = FormatRegistry::default();
    for name in BUILTIN_FORMATS {
        assert!(!matches(&path, registry.get(name).unwrap()), "{name}");
    }
    assert!(read_shebang(&path).is_none());
}

#[test]
fn directory_never_classifies_by_content() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("python");
    fs::create_dir(&dir).unwrap();

    assert!(!matches(&dir, &builtin(PYTHON)));
}

#[test]
fn json_has_no_content_sniffing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data");
    fs::write(&path, "#!/usr/bin/env json\n{}").unwrap();

    assert!(!matches(&path, &builtin(JSON)));
}

#[test]
fn yaml_document_marker_alone_is_not_a_shebang() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes");
    fs::write(&path, "---\ntitle: x\n").unwrap();

    assert!(!matches(&path, &builtin(YAML)));
}

#[test]
fn classifier_returns_all_matches_in_rule_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("odd.sh");
    fs::write(&path, "#!/usr/bin/env puppet\n").unwrap();

    let registry = FormatRegistry::default();
    let classifier = FileClassifier::new(registry.all());
    let names: Vec<_> = classifier
        .classify(&path)
        .iter()
        .map(|r| r.name.as_str())
        .collect();

    assert_eq!(names, vec!["puppet", "shell"]);
}

#[test]
fn classifier_skips_unrecognized_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README");
    fs::write(&path, "plain text\n").unwrap();

    let registry = FormatRegistry::default();
    assert!(FileClassifier::new(registry.all()).classify(&path).is_empty());
}
