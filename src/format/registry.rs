use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::FormatConfig;
use crate::error::{Result, SyntaxGuardError};

use super::{ERB, JSON, PERL, PUPPET, PYTHON, RUBY, SHELL, YAML};

/// How a format is recognized: path suffixes first, then an optional token
/// looked up in the file's `#!/` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRule {
    pub name: String,
    pub extensions: Vec<String>,
    pub shebang: Option<String>,
}

impl FormatRule {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, shebang: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            shebang: shebang.map(String::from),
        }
    }

    /// Case-sensitive suffix match of the whole path against the extensions.
    #[must_use]
    pub fn matches_extension(&self, path_str: &str) -> bool {
        self.extensions.iter().any(|ext| path_str.ends_with(ext.as_str()))
    }

    /// `line` must already be a `#!/` line.
    #[must_use]
    pub fn matches_shebang(&self, line: &str) -> bool {
        self.shebang
            .as_deref()
            .is_some_and(|token| line.contains(token))
    }
}

#[derive(Debug, Clone)]
pub struct FormatRegistry {
    rules: Vec<FormatRule>,
    name_map: HashMap<String, usize>,
}

impl FormatRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            name_map: HashMap::new(),
        }
    }

    /// Registers a rule. A rule with an already known name replaces the old
    /// one in place, keeping its dispatch position.
    pub fn register(&mut self, rule: FormatRule) {
        if let Some(&idx) = self.name_map.get(&rule.name) {
            self.rules[idx] = rule;
            return;
        }
        self.name_map.insert(rule.name.clone(), self.rules.len());
        self.rules.push(rule);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormatRule> {
        self.name_map.get(name).map(|&idx| &self.rules[idx])
    }

    #[must_use]
    pub fn all(&self) -> &[FormatRule] {
        &self.rules
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Resolves `enabled` into rules, in registry order. An empty list
    /// enables every registered rule.
    ///
    /// # Errors
    /// Returns an error if a name is not registered.
    pub fn select(&self, enabled: &[String]) -> Result<Vec<FormatRule>> {
        if let Some(unknown) = enabled.iter().find(|name| self.get(name).is_none()) {
            return Err(SyntaxGuardError::UnknownFormat(unknown.clone()));
        }
        Ok(self
            .rules
            .iter()
            .filter(|rule| enabled.is_empty() || enabled.contains(&rule.name))
            .cloned()
            .collect())
    }

    /// Built-in rules with `[formats.*]` config entries applied on top.
    ///
    /// # Errors
    /// Returns an error if a new format is declared without extensions.
    pub fn with_custom_formats(custom: &IndexMap<String, FormatConfig>) -> Result<Self> {
        let mut registry = Self::default();

        for (name, config) in custom {
            let rule = match registry.get(name) {
                Some(existing) => FormatRule {
                    name: name.clone(),
                    extensions: config
                        .extensions
                        .clone()
                        .unwrap_or_else(|| existing.extensions.clone()),
                    shebang: config.shebang.clone().or_else(|| existing.shebang.clone()),
                },
                None => {
                    let Some(extensions) = config.extensions.clone() else {
                        return Err(SyntaxGuardError::Config(format!(
                            "format '{name}' needs an `extensions` list"
                        )));
                    };
                    FormatRule {
                        name: name.clone(),
                        extensions,
                        shebang: config.shebang.clone(),
                    }
                }
            };
            registry.register(rule);
        }

        Ok(registry)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(FormatRule::new(PUPPET, vec![".pp"], Some("puppet")));
        registry.register(FormatRule::new(ERB, vec![".erb"], Some("erb")));
        registry.register(FormatRule::new(PYTHON, vec![".py"], Some("python")));
        registry.register(FormatRule::new(RUBY, vec![".rb"], Some("ruby")));
        registry.register(FormatRule::new(PERL, vec![".pl", ".pm"], Some("perl")));
        registry.register(FormatRule::new(SHELL, vec![".sh", ".bash"], Some("bash")));
        registry.register(FormatRule::new(JSON, vec![".json"], None));
        registry.register(FormatRule::new(YAML, vec![".yaml", ".yml"], Some("---")));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
