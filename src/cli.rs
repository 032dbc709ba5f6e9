use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "syntax-guard")]
#[command(author, version, about = "Syntax guard - check that every file in a tree parses")]
#[command(long_about = "Walks a directory tree, recognizes files by extension or shebang and \
    runs a syntax-only check for each recognized format.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - At least one file failed its syntax check\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the syntax of every recognized file
    Check(CheckArgs),

    /// List known formats and whether their checkers are available
    Formats(FormatsArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prune directories whose path ends with this suffix (can be repeated)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Only check these formats (can be repeated; default: all)
    #[arg(long = "format-id", value_name = "NAME")]
    pub formats: Vec<String>,

    /// Also report files no format recognizes
    #[arg(long)]
    pub all: bool,

    /// Number of files checked in parallel (overrides config)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Seconds an external checker may run before it is skipped; 0 disables
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format [possible values: text, json, junit]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the JUnit test suite (overrides config)
    #[arg(long)]
    pub suite_name: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FormatsArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
