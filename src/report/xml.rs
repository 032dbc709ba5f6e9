//! JUnit XML rendering.
//!
//! `errors` and the suite-level `time` are always `0`; consumers read the
//! per-case `time` instead.

use std::borrow::Cow;
use std::fmt::Write;

use chrono::SecondsFormat;

use super::collection::Suite;
use super::testcase::{TestCase, TestStatus};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escapes the five XML special characters.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

pub(super) fn render(suites: &[Suite]) -> String {
    let mut out = String::new();
    writeln!(out, "{HEADER}").ok();
    writeln!(out, "<testsuites>").ok();
    for suite in suites {
        render_suite(&mut out, suite);
    }
    writeln!(out, "</testsuites>").ok();
    out
}

fn render_suite(out: &mut String, suite: &Suite) {
    writeln!(
        out,
        r#"  <testsuite name="{}" errors="0" tests="{}" failures="{}" time="0" timestamp="{}">"#,
        escape(suite.name()),
        suite.tests(),
        suite.failures(),
        suite.timestamp().to_rfc3339_opts(SecondsFormat::Secs, false),
    )
    .ok();
    writeln!(out, "    <properties/>").ok();
    for case in suite.cases() {
        render_case(out, case);
    }
    writeln!(out, "  </testsuite>").ok();
}

fn render_case(out: &mut String, case: &TestCase) {
    write!(out, r#"    <testcase classname="{}""#, escape(case.classname())).ok();
    if let Some(description) = case.description() {
        write!(out, r#" name="{}""#, escape(description)).ok();
    }
    let time = case
        .duration()
        .map(|d| d.as_secs_f64().to_string())
        .unwrap_or_default();
    write!(out, r#" time="{time}""#).ok();

    let mut body = String::new();
    match case.status() {
        TestStatus::Failed => {
            writeln!(
                body,
                r#"      <failure message="{}">{}</failure>"#,
                escape(case.error_type().unwrap_or_default()),
                escape(case.errors().unwrap_or_default()),
            )
            .ok();
        }
        TestStatus::Skipped => {
            writeln!(body, "      <skipped/>").ok();
        }
        TestStatus::Pending | TestStatus::Passed => {}
    }
    if let Some(output) = case.output() {
        writeln!(body, "      <system-out>{}</system-out>", escape(output)).ok();
    }
    if let Some(errors) = case.errors() {
        writeln!(body, "      <system-err>{}</system-err>", escape(errors)).ok();
    }

    if body.is_empty() {
        writeln!(out, "/>").ok();
    } else {
        writeln!(out, ">").ok();
        out.push_str(&body);
        writeln!(out, "    </testcase>").ok();
    }
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
