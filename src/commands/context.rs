use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::checker::{CheckRegistry, SystemRunner, ToolRunner};
use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::engine::SyntaxCheckEngine;
use crate::error::Result;
use crate::format::FormatRegistry;
use crate::output::{ColorMode, ErrorOutput};
use crate::scanner::ExcludeFilter;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Loads the explicit config file, the discovered one, or defaults.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn system_runner(config: &Config) -> Arc<dyn ToolRunner> {
    Arc::new(SystemRunner::new().with_timeout(Duration::from_secs(config.check.timeout_secs)))
}

/// Format rules and checkers with every `[formats.*]` entry applied.
///
/// # Errors
/// Returns an error if a custom format is incomplete.
pub(crate) fn registries(
    config: &Config,
    runner: &Arc<dyn ToolRunner>,
) -> Result<(FormatRegistry, CheckRegistry)> {
    let formats = FormatRegistry::with_custom_formats(&config.formats)?;
    let checkers = CheckRegistry::with_custom_formats(runner, &config.formats)?;
    Ok((formats, checkers))
}

/// Builds the engine described by `config`. Advisories go to stderr unless
/// `quiet` is set.
///
/// # Errors
/// Returns an error on unknown formats, invalid globs or incomplete custom
/// formats.
pub(crate) fn build_engine(
    config: &Config,
    color: ColorMode,
    quiet: bool,
) -> Result<SyntaxCheckEngine> {
    let runner = system_runner(config);
    let (formats, checkers) = registries(config, &runner)?;
    let filter = ExcludeFilter::new(
        config.scanner.exclude.clone(),
        &config.scanner.exclude_globs,
    )?;

    let engine = SyntaxCheckEngine::new(&formats, checkers, &config.check.formats)?
        .with_filter(filter)
        .with_report_unclassified(config.scanner.report_unclassified)
        .with_jobs(config.check.jobs);

    if quiet {
        return Ok(engine.with_advisory_handler(|_| {}));
    }
    let errors = ErrorOutput::new(color);
    Ok(engine.with_advisory_handler(move |advisory| errors.print_warning(advisory)))
}
