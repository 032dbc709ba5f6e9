use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyntaxGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read path: {path}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Failed to run {program}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {seconds}s")]
    ToolTimeout { program: String, seconds: u64 },

    #[error("Invalid report: {0}")]
    Report(String),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SyntaxGuardError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::Traversal { .. } => "Traversal",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::InvalidPattern { .. } => "Pattern",
            Self::UnknownFormat(_) => "Format",
            Self::ToolSpawn { .. } | Self::ToolTimeout { .. } => "Tool",
            Self::Report(_) => "Report",
            Self::WorkerPool(_) => "Runtime",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Actionable hint shown under the error, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format or run with --no-config".to_string())
            }
            Self::Traversal { source, .. }
            | Self::FileRead { source, .. }
            | Self::FileWrite { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    Some("Check that the file path exists".to_string())
                }
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check the file permissions".to_string())
                }
                _ => None,
            },
            Self::InvalidPattern { .. } => {
                Some("Check the glob syntax, e.g. \"**/generated\"".to_string())
            }
            Self::UnknownFormat(_) => {
                Some("Run `syntax-guard formats` to list the known formats".to_string())
            }
            Self::ToolTimeout { .. } => {
                Some("Increase --timeout or pass 0 to disable it".to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyntaxGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
