use std::fmt::Write;

use crate::checker::{Availability, CheckRegistry};
use crate::cli::{Cli, FormatsArgs};
use crate::error::Result;
use crate::format::FormatRegistry;
use crate::output::{ErrorOutput, write_output};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, registries, system_runner};

#[must_use]
pub fn run_formats(args: &FormatsArgs, cli: &Cli) -> i32 {
    match run_formats_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_failure(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_formats_impl(args: &FormatsArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let runner = system_runner(&config);
    let (formats, checkers) = registries(&config, &runner)?;
    write_output(None, &format_table(&formats, &checkers), cli.quiet)
}

fn describe_availability(availability: Option<Availability>) -> String {
    match availability {
        Some(Availability::Native) => "native".to_string(),
        Some(Availability::Available(paths)) => paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
        Some(Availability::Missing(tool)) => format!("missing ({tool})"),
        None => "no checker".to_string(),
    }
}

/// One line per format: name, extensions, shebang token and checker status.
pub(crate) fn format_table(formats: &FormatRegistry, checkers: &CheckRegistry) -> String {
    let mut out = String::new();
    for rule in formats.all() {
        let extensions = if rule.extensions.is_empty() {
            "-".to_string()
        } else {
            rule.extensions.join(",")
        };
        let shebang = rule.shebang.as_deref().unwrap_or("-");
        let checker = checkers
            .get(&rule.name)
            .map_or_else(|| "-".to_string(), |c| c.describe());

        writeln!(
            out,
            "{:<10} {:<16} {:<8} {}",
            rule.name,
            extensions,
            shebang,
            describe_availability(checkers.availability(&rule.name))
        )
        .ok();
        writeln!(out, "{:<10} {checker}", "").ok();
    }
    out
}

#[cfg(test)]
#[path = "formats_tests.rs"]
mod tests;
