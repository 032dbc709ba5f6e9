mod filter;

pub use filter::{DirectoryFilter, ExcludeFilter};

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SyntaxGuardError};

/// Depth-first, pre-order walk over regular files with subtree pruning.
///
/// Entries are visited sorted by file name so runs are reproducible. The
/// filter is applied to every directory before descending, the root
/// included. A symlink to a file is visited under its own path; symlinked
/// directories are not descended into.
pub struct DirectoryWalker<F: DirectoryFilter> {
    filter: F,
}

impl<F: DirectoryFilter> DirectoryWalker<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Calls `visit` for every regular file under `root` (or `root` itself
    /// when it is a file). Returns the number of files visited.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist or cannot be read. Failures
    /// below the root are logged and skipped.
    pub fn walk(&self, root: &Path, mut visit: impl FnMut(&Path)) -> Result<usize> {
        std::fs::metadata(root).map_err(|source| SyntaxGuardError::Traversal {
            path: root.to_path_buf(),
            source,
        })?;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let pruned = e.file_type().is_dir() && self.filter.should_prune(e.path());
                if pruned {
                    tracing::debug!(path = %e.path().display(), "pruned directory");
                }
                !pruned
            });

        let mut visited = 0;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(SyntaxGuardError::Traversal {
                        path: root.to_path_buf(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if is_file(&entry) {
                visited += 1;
                visit(entry.path());
            }
        }

        Ok(visited)
    }
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
