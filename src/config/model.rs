use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_SUITE_NAME: &str = "syntax";

/// Scanner configuration: which parts of the tree are walked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Directory path suffixes whose subtrees are pruned (e.g. "vendor").
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Glob patterns matched against directory paths; matches are pruned.
    #[serde(default)]
    pub exclude_globs: Vec<String>,

    /// Report files no format recognizes as `uncomputed`.
    #[serde(default)]
    pub report_unclassified: bool,
}

/// Check configuration: which formats run and how.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Enabled formats. Empty enables every registered format.
    #[serde(default)]
    pub formats: Vec<String>,

    /// Number of files checked in parallel.
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Per-tool time limit in seconds; 0 disables it.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            formats: Vec::new(),
            jobs: default_jobs(),
            timeout_secs: 0,
        }
    }
}

/// JUnit report configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default = "default_suite_name")]
    pub suite_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            suite_name: default_suite_name(),
        }
    }
}

/// `[formats.<name>]`: overrides a built-in format or declares a new one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatConfig {
    /// Path suffixes, e.g. `[".sh", ".bash"]`.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Token looked for in a `#!/` first line.
    #[serde(default)]
    pub shebang: Option<String>,

    /// External checker: program followed by its arguments; `{path}` is
    /// replaced by the checked file.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub formats: IndexMap<String, FormatConfig>,
}

const fn default_jobs() -> usize {
    1
}

fn default_suite_name() -> String {
    DEFAULT_SUITE_NAME.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
