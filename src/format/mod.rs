mod classifier;
mod registry;

pub use classifier::{FileClassifier, matches, read_shebang};
pub use registry::{FormatRegistry, FormatRule};

pub const PUPPET: &str = "puppet";
pub const ERB: &str = "erb";
pub const PYTHON: &str = "python";
pub const RUBY: &str = "ruby";
pub const PERL: &str = "perl";
pub const SHELL: &str = "shell";
pub const JSON: &str = "json";
pub const YAML: &str = "yaml";

/// Built-in formats in dispatch order.
pub const BUILTIN_FORMATS: [&str; 8] = [PUPPET, ERB, PYTHON, RUBY, PERL, SHELL, JSON, YAML];

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
