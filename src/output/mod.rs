mod error_output;
mod json;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonReporter;
pub use text::TextReporter;

use std::fs;
use std::path::Path;

use crate::error::{Result, SyntaxGuardError};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Per <https://no-color.org>, presence of the variable disables color.
fn no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Junit,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "junit" | "xml" => Ok(Self::Junit),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Writes `content` to `output_path`, or to stdout when there is none.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    let Some(path) = output_path else {
        if !quiet {
            print!("{content}");
        }
        return Ok(());
    };

    let write_error = |source| SyntaxGuardError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
