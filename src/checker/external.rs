use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::SyntaxGuardError;

use super::process::{Invocation, ToolOutput, ToolRunner};
use super::{Availability, CheckOutcome, SyntaxChecker};

/// Placeholder replaced by the checked file's path in argument templates.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Compile-only Python check; `compile()` never writes bytecode next to the file.
const PYTHON_COMPILE: &str =
    "import sys; compile(open(sys.argv[1], 'rb').read(), sys.argv[1], 'exec')";

/// An external program, known by one or more names (first found wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    pub candidates: Vec<String>,
}

impl ToolSpec {
    #[must_use]
    pub fn new(candidates: &[&str]) -> Self {
        Self {
            candidates: candidates.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Name shown in advisories.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.candidates.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn resolve(&self, runner: &dyn ToolRunner) -> Option<PathBuf> {
        self.candidates.iter().find_map(|name| runner.resolve(name))
    }

    fn advisory(&self) -> String {
        format!(
            "Consider installing {} so that syntax can be checked.",
            self.display_name()
        )
    }
}

/// Expand an argument template for `path`. Without a placeholder the path is
/// appended as the last argument.
#[must_use]
pub fn expand_args(template: &[String], path: &Path) -> Vec<String> {
    let path_str = path.to_string_lossy();
    let mut args: Vec<String> = template
        .iter()
        .map(|arg| arg.replace(PATH_PLACEHOLDER, &path_str))
        .collect();
    if !template.iter().any(|arg| arg.contains(PATH_PLACEHOLDER)) {
        args.push(path_str.to_string());
    }
    args
}

/// Converts a finished run into an outcome. Exit code 0 passes.
fn outcome_from_output(tool: &str, output: &ToolOutput) -> CheckOutcome {
    let combined = output.combined();
    if output.success {
        return CheckOutcome::passed().with_output(combined);
    }
    if combined.trim().is_empty() {
        let code = output
            .code
            .map_or_else(|| "a signal".to_string(), |code| code.to_string());
        return CheckOutcome::failed(format!("{tool} exited with status {code}"));
    }
    CheckOutcome::failed(combined)
}

/// A run that never produced an exit status is not the file's fault.
fn outcome_from_run_error(error: &SyntaxGuardError) -> CheckOutcome {
    CheckOutcome::skipped().with_diagnostic(error.to_string())
}

/// Runs a program in syntax-check-only mode against the file.
pub struct ExternalChecker {
    tool: ToolSpec,
    args: Vec<String>,
    runner: Arc<dyn ToolRunner>,
}

impl ExternalChecker {
    #[must_use]
    pub fn new(tool: ToolSpec, args: &[&str], runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            tool,
            args: args.iter().map(|a| (*a).to_string()).collect(),
            runner,
        }
    }

    /// Build from a `command = ["tool", "arg", ...]` list.
    #[must_use]
    pub fn from_command(command: &[String], runner: Arc<dyn ToolRunner>) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            tool: ToolSpec {
                candidates: vec![program.clone()],
            },
            args: args.to_vec(),
            runner,
        })
    }

    #[must_use]
    pub fn puppet(runner: Arc<dyn ToolRunner>) -> Self {
        Self::new(
            ToolSpec::new(&["puppet"]),
            &["parser", "validate", PATH_PLACEHOLDER],
            runner,
        )
    }

    #[must_use]
    pub fn python(runner: Arc<dyn ToolRunner>) -> Self {
        Self::new(
            ToolSpec::new(&["python3", "python"]),
            &["-c", PYTHON_COMPILE, PATH_PLACEHOLDER],
            runner,
        )
    }

    #[must_use]
    pub fn ruby(runner: Arc<dyn ToolRunner>) -> Self {
        Self::new(ToolSpec::new(&["ruby"]), &["-c", PATH_PLACEHOLDER], runner)
    }

    #[must_use]
    pub fn perl(runner: Arc<dyn ToolRunner>) -> Self {
        Self::new(ToolSpec::new(&["perl"]), &["-c", PATH_PLACEHOLDER], runner)
    }

    #[must_use]
    pub fn shell(runner: Arc<dyn ToolRunner>) -> Self {
        Self::new(ToolSpec::new(&["bash"]), &["-n", PATH_PLACEHOLDER], runner)
    }

    #[must_use]
    pub const fn tool(&self) -> &ToolSpec {
        &self.tool
    }
}

impl SyntaxChecker for ExternalChecker {
    fn check(&self, path: &Path) -> CheckOutcome {
        let Some(program) = self.tool.resolve(self.runner.as_ref()) else {
            return CheckOutcome::skipped().with_advisory(self.tool.advisory());
        };

        tracing::trace!(program = %program.display(), path = %path.display(), "running checker");
        let invocation = Invocation::new(program).args(expand_args(&self.args, path));
        match self.runner.run(&invocation) {
            Ok(output) => outcome_from_output(self.tool.display_name(), &output),
            Err(error) => outcome_from_run_error(&error),
        }
    }

    fn availability(&self) -> Availability {
        self.tool
            .resolve(self.runner.as_ref())
            .map_or_else(
                || Availability::Missing(self.tool.display_name().to_string()),
                |path| Availability::Available(vec![path]),
            )
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.tool.display_name().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Two-stage check for embedded Ruby templates: `erb -x -T -` expands the
/// template to Ruby, then `ruby -c` checks the expansion read from stdin.
pub struct ErbChecker {
    erb: ToolSpec,
    ruby: ToolSpec,
    runner: Arc<dyn ToolRunner>,
}

impl ErbChecker {
    #[must_use]
    pub fn new(runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            erb: ToolSpec::new(&["erb"]),
            ruby: ToolSpec::new(&["ruby"]),
            runner,
        }
    }

    fn resolve_both(&self) -> Result<(PathBuf, PathBuf), &ToolSpec> {
        let erb = self.erb.resolve(self.runner.as_ref()).ok_or(&self.erb)?;
        let ruby = self.ruby.resolve(self.runner.as_ref()).ok_or(&self.ruby)?;
        Ok((erb, ruby))
    }
}

impl SyntaxChecker for ErbChecker {
    fn check(&self, path: &Path) -> CheckOutcome {
        let (erb, ruby) = match self.resolve_both() {
            Ok(programs) => programs,
            Err(missing) => return CheckOutcome::skipped().with_advisory(missing.advisory()),
        };

        let expand = Invocation::new(erb).args(["-x", "-T", "-"]).arg(path.as_os_str());
        let expanded = match self.runner.run(&expand) {
            Ok(output) if output.success => output.stdout,
            Ok(output) => return outcome_from_output(self.erb.display_name(), &output),
            Err(error) => return outcome_from_run_error(&error),
        };

        let syntax = Invocation::new(ruby).arg("-c").stdin(expanded.into_bytes());
        match self.runner.run(&syntax) {
            Ok(output) => outcome_from_output(self.ruby.display_name(), &output),
            Err(error) => outcome_from_run_error(&error),
        }
    }

    fn availability(&self) -> Availability {
        match self.resolve_both() {
            Ok((erb, ruby)) => Availability::Available(vec![erb, ruby]),
            Err(missing) => Availability::Missing(missing.display_name().to_string()),
        }
    }

    fn describe(&self) -> String {
        "erb -x -T - {path} | ruby -c".to_string()
    }
}

#[cfg(test)]
#[path = "external_tests.rs"]
mod tests;
