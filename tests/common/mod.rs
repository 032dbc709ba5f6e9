#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the syntax-guard binary.
#[macro_export]
macro_rules! syntax_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("syntax-guard"))
    };
}

/// Config pruning `vendor` and enabling only the in-process formats.
pub const NATIVE_ONLY_CONFIG: &str = r#"
version = "1"

[scanner]
exclude = ["vendor"]

[check]
formats = ["json", "yaml"]
"#;

pub const VALID_JSON: &str = r#"{"name": "demo", "tags": ["a", "b"]}"#;
pub const INVALID_JSON: &str = r#"{"name": "demo""#;
pub const VALID_YAML: &str = "---\nname: demo\nitems:\n  - 1\n  - 2\n";
pub const INVALID_YAML: &str = "name: [demo\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.syntax-guard.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".syntax-guard.toml", content);
    }

    /// Reads a file relative to the fixture root.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// A small tree with one valid and one invalid file per native format,
    /// plus a broken file under `vendor/`.
    pub fn native_tree() -> Self {
        let fixture = Self::new();
        fixture.create_file("config/app.json", VALID_JSON);
        fixture.create_file("config/broken.json", INVALID_JSON);
        fixture.create_file("deploy/values.yaml", VALID_YAML);
        fixture.create_file("deploy/broken.yml", INVALID_YAML);
        fixture.create_file("vendor/lib/bad.json", "{");
        fixture
    }
}
