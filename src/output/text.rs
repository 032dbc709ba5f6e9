use std::io::{self, IsTerminal, Stdout, Write};

use crate::checker::CheckStatus;
use crate::engine::{FileResult, ResultConsumer, WalkSummary};

use super::{ColorMode, ansi, no_color_set};

/// Streams one status line per outcome, with the diagnostic underneath
/// failures. Keeps a running count of failures.
pub struct TextReporter<W: Write = Stdout> {
    writer: W,
    use_colors: bool,
    verbose: u8,
    failed: usize,
}

impl TextReporter<Stdout> {
    #[must_use]
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub fn new(writer: W, mode: ColorMode) -> Self {
        Self {
            writer,
            use_colors: Self::should_use_colors(mode),
            verbose: 0,
            failed: 0,
        }
    }

    /// At verbosity 1 and above, output captured from passing tools is shown.
    #[must_use]
    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !no_color_set() && io::stdout().is_terminal(),
        }
    }

    /// Failed outcomes seen so far.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    const fn label(status: CheckStatus) -> (&'static str, &'static str) {
        match status {
            CheckStatus::Passed => ("   OK   ", ansi::GREEN),
            CheckStatus::Failed => ("  FAIL  ", ansi::RED),
            CheckStatus::Skipped => ("  SKIP  ", ansi::YELLOW),
            CheckStatus::Uncomputed => ("  ----  ", ansi::CYAN),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_indented(&mut self, text: &str) {
        for line in text.lines() {
            writeln!(self.writer, "    {line}").ok();
        }
    }

    /// Writes the closing totals line.
    pub fn write_summary(&mut self, summary: &WalkSummary) {
        let passed = self.colorize(&summary.passed.to_string(), ansi::GREEN);
        let failed = self.colorize(&summary.failed.to_string(), ansi::RED);
        let skipped = self.colorize(&summary.skipped.to_string(), ansi::YELLOW);

        writeln!(
            self.writer,
            "Summary: {} files checked, {passed} passed, {failed} failed, {skipped} skipped",
            summary.files
        )
        .ok();
        self.writer.flush().ok();
    }
}

impl<W: Write> ResultConsumer for TextReporter<W> {
    fn consume(&mut self, result: &FileResult) {
        let status = result.status();
        if status == CheckStatus::Failed {
            self.failed += 1;
        }

        let (label, color) = Self::label(status);
        let label = self.colorize(label, color);
        let path = result.path.display();
        if let Some(format) = &result.format {
            writeln!(self.writer, "{label} {path} ({format})").ok();
        } else {
            writeln!(self.writer, "{label} {path}").ok();
        }

        match status {
            CheckStatus::Failed | CheckStatus::Skipped => {
                self.write_indented(result.diagnostic());
            }
            CheckStatus::Passed if self.verbose >= 1 => {
                if let Some(output) = &result.outcome.output {
                    self.write_indented(output);
                }
            }
            CheckStatus::Passed | CheckStatus::Uncomputed => {}
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
