//! CLI entrypoint module structure.
use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Error, Result};
use tracing::debug;

use crate::validator::{
    render_json, render_summary, validate, CollectingReporter, TextReporter, ValidationReport,
};

pub mod args;
pub mod profile;

pub use args::LintArgs;
pub use profile::{resolve_repo_root, OutputFormat, RunProfile};

/// Exit status for faults that prevented a complete run.
pub const EXIT_FAULT: u8 = 2;

/// A fault carried to `main`, printed on stderr.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: u8,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("error: {err:#}"),
            exit_code: EXIT_FAULT,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Validate and render to `out`; returns the validation exit status.
pub fn execute(profile: &RunProfile, out: &mut impl Write) -> Result<u8> {
    debug!(
        target: "papers_lint::cli",
        root = %profile.run.root.display(),
        strict = profile.run.strict,
        format = profile.format.as_str(),
        config_path = ?profile.config_path,
        "Starting validation"
    );

    let report = match profile.format {
        OutputFormat::Text => run_text(profile, out)?,
        OutputFormat::Json => run_json(profile, out)?,
    };
    out.flush().context("failed to flush output")?;
    Ok(report.exit_code())
}

fn run_text(profile: &RunProfile, out: &mut impl Write) -> Result<ValidationReport> {
    let mut reporter = TextReporter::new(&mut *out);
    let report = validate(&profile.run, &mut reporter)?;
    render_summary(&report, out).context("failed to write summary")?;
    Ok(report)
}

fn run_json(profile: &RunProfile, out: &mut impl Write) -> Result<ValidationReport> {
    let mut reporter = CollectingReporter::default();
    let report = validate(&profile.run, &mut reporter)?;
    render_json(&report, &profile.run.root, profile.run.strict, out)
        .context("failed to write JSON report")?;
    Ok(report)
}

/// Run against the process stdout.
pub fn execute_stdout(profile: &RunProfile) -> Result<u8> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    execute(profile, &mut lock)
}
