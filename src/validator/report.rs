//! Issues, run reports, and their text/JSON renderings.

use std::{
    fmt,
    io::{self, Write},
    path::Path,
};

use serde::Serialize;

/// Exit status when no hard errors were recorded.
pub const EXIT_OK: u8 = 0;
/// Exit status when at least one hard error was recorded.
pub const EXIT_FAILED: u8 = 1;
/// Line printed once on a clean run.
pub const OK_LINE: &str = "OK: repository structure looks good.";

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Issue {
    message: String,
}

impl Issue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives warnings as soon as the walk discovers them.
pub trait Reporter {
    fn warning(&mut self, issue: &Issue) -> io::Result<()>;
}

/// Prints `WARNING: ` lines to the wrapped writer immediately.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn warning(&mut self, issue: &Issue) -> io::Result<()> {
        writeln!(self.out, "WARNING: {issue}")
    }
}

/// Keeps warnings in memory (JSON output and tests).
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub warnings: Vec<Issue>,
}

impl Reporter for CollectingReporter {
    fn warning(&mut self, issue: &Issue) -> io::Result<()> {
        self.warnings.push(issue.clone());
        Ok(())
    }
}

/// Ordered findings of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<Issue>,
    pub errors: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_ok() {
            EXIT_OK
        } else {
            EXIT_FAILED
        }
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(Issue::new(message));
    }
}

/// Print the `ERROR:` batch on failure, or the single `OK:` line on success.
pub fn render_summary(report: &ValidationReport, out: &mut impl Write) -> io::Result<()> {
    if report.is_ok() {
        return writeln!(out, "{OK_LINE}");
    }
    for issue in &report.errors {
        writeln!(out, "ERROR: {issue}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    strict: bool,
    status: &'static str,
    warnings: &'a [Issue],
    errors: &'a [Issue],
}

/// Render the whole run as one pretty JSON document.
pub fn render_json(
    report: &ValidationReport,
    root: &Path,
    strict: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let payload = JsonReport {
        root: root.display().to_string(),
        strict,
        status: if report.is_ok() { "ok" } else { "failed" },
        warnings: &report.warnings,
        errors: &report.errors,
    };
    serde_json::to_writer_pretty(&mut *out, &payload)?;
    writeln!(out)
}
