use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::FormatRule;

/// Upper bound on how much of a file is read when looking for a `#!/` line.
const SNIFF_LIMIT: u64 = 1024;

const SHEBANG_PREFIX: &[u8] = b"#!/";

/// Returns the first line of `path` if it is a `#!/` interpreter line.
///
/// Only regular, non-empty files are opened. Read errors are treated as "no
/// shebang" since an unreadable file cannot be classified by content.
#[must_use]
pub fn read_shebang(path: &Path) -> Option<String> {
    let metadata = fs::metadata(path).ok()?;
    if !metadata.is_file() || metadata.len() == 0 {
        return None;
    }

    let file = File::open(path).ok()?;
    let mut line = Vec::new();
    BufReader::new(file)
        .take(SNIFF_LIMIT)
        .read_until(b'\n', &mut line)
        .ok()?;

    if !line.starts_with(SHEBANG_PREFIX) {
        return None;
    }
    Some(String::from_utf8_lossy(&line).trim_end().to_string())
}

/// Does `path` belong to `rule`? Extension first, shebang second.
#[must_use]
pub fn matches(path: &Path, rule: &FormatRule) -> bool {
    if rule.matches_extension(&path.to_string_lossy()) {
        return true;
    }
    rule.shebang.is_some() && read_shebang(path).is_some_and(|line| rule.matches_shebang(&line))
}

/// Classifies a file against a set of rules, reading its first line at most once.
pub struct FileClassifier<'a> {
    rules: &'a [FormatRule],
}

impl<'a> FileClassifier<'a> {
    #[must_use]
    pub const fn new(rules: &'a [FormatRule]) -> Self {
        Self { rules }
    }

    /// Every rule that matches `path`, in rule order.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Vec<&'a FormatRule> {
        let path_str = path.to_string_lossy();
        let mut shebang: Option<Option<String>> = None;

        self.rules
            .iter()
            .filter(|rule| {
                if rule.matches_extension(&path_str) {
                    return true;
                }
                if rule.shebang.is_none() {
                    return false;
                }
                shebang
                    .get_or_insert_with(|| read_shebang(path))
                    .as_deref()
                    .is_some_and(|line| rule.matches_shebang(line))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
