//! Walk, classify and dispatch.
//!
//! The engine ties the scanner, the format rules and the checker registry
//! together and delivers one [`FileResult`] per (file, matched format) pair.

mod result;

pub use result::{FileResult, ResultConsumer, WalkSummary};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::checker::{CheckOutcome, CheckRegistry};
use crate::error::{Result, SyntaxGuardError};
use crate::format::{FileClassifier, FormatRegistry, FormatRule};
use crate::output::{ColorMode, ErrorOutput, TextReporter};
use crate::scanner::{DirectoryWalker, ExcludeFilter};

type AdvisoryHandler = Box<dyn Fn(&str)>;

/// A file that still has to be checked against `format`.
struct Task {
    path: PathBuf,
    format: Option<String>,
}

pub struct SyntaxCheckEngine {
    rules: Vec<FormatRule>,
    checkers: CheckRegistry,
    filter: ExcludeFilter,
    report_unclassified: bool,
    jobs: usize,
    on_advisory: AdvisoryHandler,
}

impl SyntaxCheckEngine {
    /// Builds an engine for the `enabled` formats (all registered formats
    /// when empty), with no excludes, sequential checks and advisories
    /// printed as warnings on stderr.
    ///
    /// # Errors
    /// Returns an error if an enabled format has no rule or no checker.
    pub fn new(formats: &FormatRegistry, checkers: CheckRegistry, enabled: &[String]) -> Result<Self> {
        let rules = formats.select(enabled)?;
        if let Some(rule) = rules.iter().find(|rule| !checkers.contains(&rule.name)) {
            return Err(SyntaxGuardError::UnknownFormat(rule.name.clone()));
        }

        Ok(Self {
            rules,
            checkers,
            filter: ExcludeFilter::none(),
            report_unclassified: false,
            jobs: 1,
            on_advisory: Box::new(|advisory| ErrorOutput::stderr().print_warning(advisory)),
        })
    }

    #[must_use]
    pub fn with_filter(mut self, filter: ExcludeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Also deliver an `uncomputed` result for files no rule matched.
    #[must_use]
    pub fn with_report_unclassified(mut self, enabled: bool) -> Self {
        self.report_unclassified = enabled;
        self
    }

    /// Run checks on `jobs` threads. Delivery order is unchanged.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    #[must_use]
    pub fn with_advisory_handler(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_advisory = Box::new(handler);
        self
    }

    /// Names of the formats this engine dispatches to, in dispatch order.
    #[must_use]
    pub fn formats(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name.as_str()).collect()
    }

    /// Walks `root` and hands every outcome to `consumer`.
    ///
    /// # Errors
    /// Returns an error if `root` cannot be read or the worker pool cannot
    /// be started. Per-file problems are outcomes, never errors.
    pub fn walk<C>(&self, root: &Path, consumer: &mut C) -> Result<WalkSummary>
    where
        C: ResultConsumer + ?Sized,
    {
        let mut summary = WalkSummary::default();
        let mut advisories = HashSet::new();

        if self.jobs > 1 {
            let tasks = self.collect_tasks(root, &mut summary)?;
            for result in self.check_parallel(tasks)? {
                self.deliver(result, consumer, &mut summary, &mut advisories);
            }
        } else {
            let walker = DirectoryWalker::new(&self.filter);
            let mut pending = Vec::new();
            let files = walker.walk(root, |path| {
                self.plan(path, &mut pending);
                for task in pending.drain(..) {
                    let result = self.check(task);
                    self.deliver(result, &mut *consumer, &mut summary, &mut advisories);
                }
            })?;
            summary.files = files;
        }

        tracing::debug!(
            root = %root.display(),
            files = summary.files,
            failed = summary.failed,
            "walk finished"
        );
        Ok(summary)
    }

    /// Walks `root` printing each outcome as a colored status line.
    /// Returns the number of failed outcomes.
    ///
    /// # Errors
    /// Same as [`Self::walk`].
    pub fn walk_with_default_reporter(&self, root: &Path) -> Result<usize> {
        let mut reporter = TextReporter::stdout(ColorMode::Auto);
        self.walk(root, &mut reporter)?;
        Ok(reporter.failed())
    }

    fn plan(&self, path: &Path, tasks: &mut Vec<Task>) {
        let matched = FileClassifier::new(&self.rules).classify(path);
        tracing::trace!(
            path = %path.display(),
            formats = ?matched.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            "classified"
        );

        if matched.is_empty() {
            if self.report_unclassified {
                tasks.push(Task {
                    path: path.to_path_buf(),
                    format: None,
                });
            }
            return;
        }

        tasks.extend(matched.into_iter().map(|rule| Task {
            path: path.to_path_buf(),
            format: Some(rule.name.clone()),
        }));
    }

    fn collect_tasks(&self, root: &Path, summary: &mut WalkSummary) -> Result<Vec<Task>> {
        let walker = DirectoryWalker::new(&self.filter);
        let mut tasks = Vec::new();
        summary.files = walker.walk(root, |path| self.plan(path, &mut tasks))?;
        Ok(tasks)
    }

    fn check_parallel(&self, tasks: Vec<Task>) -> Result<Vec<FileResult>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| SyntaxGuardError::WorkerPool(e.to_string()))?;

        let checkers = &self.checkers;
        Ok(pool.install(|| {
            tasks
                .into_par_iter()
                .map(|task| check_task(checkers, task))
                .collect()
        }))
    }

    fn check(&self, task: Task) -> FileResult {
        check_task(&self.checkers, task)
    }

    fn deliver<C>(
        &self,
        mut result: FileResult,
        consumer: &mut C,
        summary: &mut WalkSummary,
        advisories: &mut HashSet<String>,
    ) where
        C: ResultConsumer + ?Sized,
    {
        if let Some(advisory) = result.outcome.advisory.take()
            && advisories.insert(advisory.clone())
        {
            (self.on_advisory)(&advisory);
        }

        summary.record(result.outcome.status);
        consumer.consume(&result);
    }
}

fn check_task(checkers: &CheckRegistry, task: Task) -> FileResult {
    let started = Instant::now();
    let outcome = match task.format.as_deref() {
        None => CheckOutcome::uncomputed(),
        Some(format) => checkers.get(format).map_or_else(
            || CheckOutcome::skipped().with_diagnostic(format!("no checker for {format}")),
            |checker| checker.check(&task.path),
        ),
    };

    tracing::debug!(
        path = %task.path.display(),
        format = task.format.as_deref().unwrap_or("-"),
        status = %outcome.status,
        "checked"
    );

    FileResult {
        path: task.path,
        format: task.format,
        outcome,
        elapsed: started.elapsed(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
