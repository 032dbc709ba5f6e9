mod external;
mod native;
mod process;
mod registry;
mod result;
#[cfg(test)]
pub(crate) mod test_support;

pub use external::{ErbChecker, ExternalChecker, PATH_PLACEHOLDER, ToolSpec, expand_args};
pub use native::{JsonChecker, YamlChecker};
pub use process::{Invocation, SystemRunner, ToolOutput, ToolRunner, find_in_path};
pub use registry::CheckRegistry;
pub use result::{CheckOutcome, CheckStatus};

use std::path::{Path, PathBuf};

/// Whether a checker can run on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Parsed in-process.
    Native,
    /// Every required program was found.
    Available(Vec<PathBuf>),
    /// The named program is not on the search path.
    Missing(String),
}

impl Availability {
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        !matches!(self, Self::Missing(_))
    }
}

/// Syntax check for one format.
///
/// Implementations never fail: every problem with a file, including an
/// unavailable tool, is expressed as a [`CheckOutcome`].
pub trait SyntaxChecker: Send + Sync {
    fn check(&self, path: &Path) -> CheckOutcome;

    fn availability(&self) -> Availability;

    /// Short human description of what runs, e.g. `bash -n {path}`.
    fn describe(&self) -> String;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
