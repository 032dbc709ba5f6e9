use std::path::PathBuf;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::engine::{FileResult, ResultConsumer, SyntaxCheckEngine, WalkSummary};
use crate::error::{Result, SyntaxGuardError};
use crate::output::{
    ColorMode, ErrorOutput, JsonReporter, OutputFormat, TextReporter, write_output,
};
use crate::report::{ReportCollection, SuiteRecorder};
use crate::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{build_engine, color_choice_to_mode, load_config};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_failure(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args)?;

    // 3. Build the engine
    let color_mode = color_choice_to_mode(cli.color);
    let engine = build_engine(&config, color_mode, cli.quiet)?;
    tracing::debug!(formats = ?engine.formats(), jobs = config.check.jobs, "engine ready");

    // 4. Walk and report
    let summary = match args.format {
        OutputFormat::Text => run_text(&engine, args, cli, color_mode)?,
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new();
            let summary = walk_all(&engine, &args.paths, &mut reporter)?;
            write_output(args.output.as_deref(), &reporter.render(&summary)?, cli.quiet)?;
            summary
        }
        OutputFormat::Junit => {
            let mut recorder = SuiteRecorder::new(config.report.suite_name.clone());
            let summary = walk_all(&engine, &args.paths, &mut recorder)?;
            let mut collection = ReportCollection::new();
            collection.push_suite(recorder.into_suite());
            write_output(args.output.as_deref(), &collection.to_markup(), cli.quiet)?;
            summary
        }
    };

    // 5. Determine exit code
    if summary.has_failures() {
        Ok(EXIT_CHECK_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) -> Result<()> {
    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if !args.formats.is_empty() {
        config.check.formats.clone_from(&args.formats);
    }
    if args.all {
        config.scanner.report_unclassified = true;
    }
    if let Some(jobs) = args.jobs {
        if jobs == 0 {
            return Err(SyntaxGuardError::Config(
                "--jobs must be at least 1".to_string(),
            ));
        }
        config.check.jobs = jobs;
    }
    if let Some(timeout) = args.timeout {
        config.check.timeout_secs = timeout;
    }
    if let Some(name) = &args.suite_name {
        config.report.suite_name.clone_from(name);
    }
    Ok(())
}

fn walk_all<C>(engine: &SyntaxCheckEngine, paths: &[PathBuf], consumer: &mut C) -> Result<WalkSummary>
where
    C: ResultConsumer + ?Sized,
{
    let mut summary = WalkSummary::default();
    for path in paths {
        summary.merge(&engine.walk(path, consumer)?);
    }
    Ok(summary)
}

fn run_text(
    engine: &SyntaxCheckEngine,
    args: &CheckArgs,
    cli: &Cli,
    color_mode: ColorMode,
) -> Result<WalkSummary> {
    if let Some(output) = &args.output {
        let mut reporter = TextReporter::new(Vec::new(), ColorMode::Never).with_verbose(cli.verbose);
        let summary = walk_all(engine, &args.paths, &mut reporter)?;
        reporter.write_summary(&summary);
        let text = String::from_utf8_lossy(&reporter.into_inner()).into_owned();
        write_output(Some(output), &text, cli.quiet)?;
        return Ok(summary);
    }

    if cli.quiet {
        return walk_all(engine, &args.paths, &mut |_: &FileResult| {});
    }

    let mut reporter = TextReporter::stdout(color_mode).with_verbose(cli.verbose);
    let summary = walk_all(engine, &args.paths, &mut reporter)?;
    reporter.write_summary(&summary);
    Ok(summary)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
