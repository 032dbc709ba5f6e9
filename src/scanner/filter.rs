use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SyntaxGuardError};

/// Decides which directories are pruned during a walk.
pub trait DirectoryFilter {
    fn should_prune(&self, dir: &Path) -> bool;
}

impl<T: DirectoryFilter + ?Sized> DirectoryFilter for &T {
    fn should_prune(&self, dir: &Path) -> bool {
        (**self).should_prune(dir)
    }
}

/// Prunes directories whose full path ends with one of the configured
/// suffixes, or that match one of the glob patterns.
///
/// Suffixes are plain string suffixes: `vendor` prunes `./vendor` and also
/// `./old-vendor`.
pub struct ExcludeFilter {
    suffixes: Vec<String>,
    globs: GlobSet,
}

impl ExcludeFilter {
    /// # Errors
    /// Returns an error if any glob pattern is invalid.
    pub fn new(suffixes: Vec<String>, glob_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in glob_patterns {
            let glob = Glob::new(pattern).map_err(|e| SyntaxGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let globs = builder
            .build()
            .map_err(|e| SyntaxGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { suffixes, globs })
    }

    /// A filter that prunes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            suffixes: Vec::new(),
            globs: GlobSet::empty(),
        }
    }

    fn matches_suffix(&self, dir: &Path) -> bool {
        let dir_str = dir.to_string_lossy();
        let trimmed = dir_str.trim_end_matches(['/', '\\']);
        self.suffixes
            .iter()
            .filter(|suffix| !suffix.is_empty())
            .any(|suffix| trimmed.ends_with(suffix.as_str()))
    }
}

impl DirectoryFilter for ExcludeFilter {
    fn should_prune(&self, dir: &Path) -> bool {
        self.matches_suffix(dir) || self.globs.is_match(dir)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
