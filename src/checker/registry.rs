use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::FormatConfig;
use crate::error::{Result, SyntaxGuardError};
use crate::format::{ERB, JSON, PERL, PUPPET, PYTHON, RUBY, SHELL, YAML};

use super::{
    Availability, ErbChecker, ExternalChecker, JsonChecker, SyntaxChecker, ToolRunner, YamlChecker,
};

/// Format name to checker capability.
pub struct CheckRegistry {
    checkers: IndexMap<String, Box<dyn SyntaxChecker>>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            checkers: IndexMap::new(),
        }
    }

    /// Registers `checker` for `format`, replacing any previous one.
    pub fn register(&mut self, format: &str, checker: Box<dyn SyntaxChecker>) {
        self.checkers.insert(format.to_string(), checker);
    }

    #[must_use]
    pub fn get(&self, format: &str) -> Option<&dyn SyntaxChecker> {
        self.checkers.get(format).map(|checker| &**checker)
    }

    #[must_use]
    pub fn contains(&self, format: &str) -> bool {
        self.checkers.contains_key(format)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.checkers.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn availability(&self, format: &str) -> Option<Availability> {
        self.get(format).map(|checker| checker.availability())
    }

    /// Checkers for every built-in format, external ones running through `runner`.
    #[must_use]
    pub fn builtin(runner: &Arc<dyn ToolRunner>) -> Self {
        let mut registry = Self::new();

        registry.register(PUPPET, Box::new(ExternalChecker::puppet(runner.clone())));
        registry.register(ERB, Box::new(ErbChecker::new(runner.clone())));
        registry.register(PYTHON, Box::new(ExternalChecker::python(runner.clone())));
        registry.register(RUBY, Box::new(ExternalChecker::ruby(runner.clone())));
        registry.register(PERL, Box::new(ExternalChecker::perl(runner.clone())));
        registry.register(SHELL, Box::new(ExternalChecker::shell(runner.clone())));
        registry.register(JSON, Box::new(JsonChecker));
        registry.register(YAML, Box::new(YamlChecker));

        registry
    }

    /// Built-in checkers plus the `command` of every `[formats.*]` entry.
    ///
    /// # Errors
    /// Returns an error if a new format has no command, or a command is empty.
    pub fn with_custom_formats(
        runner: &Arc<dyn ToolRunner>,
        custom: &IndexMap<String, FormatConfig>,
    ) -> Result<Self> {
        let mut registry = Self::builtin(runner);

        for (name, config) in custom {
            match &config.command {
                Some(command) => {
                    let checker = ExternalChecker::from_command(command, runner.clone())
                        .ok_or_else(|| {
                            SyntaxGuardError::Config(format!(
                                "format '{name}' has an empty `command`"
                            ))
                        })?;
                    registry.register(name, Box::new(checker));
                }
                None if !registry.contains(name) => {
                    return Err(SyntaxGuardError::Config(format!(
                        "format '{name}' needs a `command` to check it with"
                    )));
                }
                None => {}
            }
        }

        Ok(registry)
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
