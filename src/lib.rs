pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{Result, SyntaxGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
