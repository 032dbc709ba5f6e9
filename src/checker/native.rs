use std::path::Path;

use serde::Deserialize;
use serde::de::IgnoredAny;

use super::{Availability, CheckOutcome, SyntaxChecker};

fn read_source(path: &Path) -> Result<Vec<u8>, CheckOutcome> {
    std::fs::read(path).map_err(|e| CheckOutcome::failed(format!("cannot read file: {e}")))
}

/// Parses the file as a single JSON value.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonChecker;

impl JsonChecker {
    /// # Errors
    /// Returns the parser message if `source` is not valid JSON.
    pub fn parse(source: &[u8]) -> Result<(), String> {
        serde_json::from_slice::<serde_json::Value>(source)
            .map(drop)
            .map_err(|e| e.to_string())
    }
}

impl SyntaxChecker for JsonChecker {
    fn check(&self, path: &Path) -> CheckOutcome {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(outcome) => return outcome,
        };
        match Self::parse(&source) {
            Ok(()) => CheckOutcome::passed(),
            Err(message) => CheckOutcome::failed(message),
        }
    }

    fn availability(&self) -> Availability {
        Availability::Native
    }

    fn describe(&self) -> String {
        "built-in JSON parser".to_string()
    }
}

/// Parses every document of a YAML stream without building values, so
/// mapping rules such as duplicate keys are not enforced.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlChecker;

impl YamlChecker {
    /// # Errors
    /// Returns the parser message of the first malformed document.
    pub fn parse(source: &[u8]) -> Result<(), String> {
        for document in serde_yaml::Deserializer::from_slice(source) {
            IgnoredAny::deserialize(document).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl SyntaxChecker for YamlChecker {
    fn check(&self, path: &Path) -> CheckOutcome {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(outcome) => return outcome,
        };
        match Self::parse(&source) {
            Ok(()) => CheckOutcome::passed(),
            Err(message) => CheckOutcome::failed(message),
        }
    }

    fn availability(&self) -> Availability {
        Availability::Native
    }

    fn describe(&self) -> String {
        "built-in YAML parser".to_string()
    }
}

#[cfg(test)]
#[path = "native_tests.rs"]
mod tests;
