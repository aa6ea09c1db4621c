//! Repository structure validation.
//!
//! A run checks the required top-level paths, then the tool directories,
//! then every visible subdirectory of each tool directory as a paper
//! directory. Warnings go to the [`Reporter`] as they are found; errors are
//! collected into the returned [`ValidationReport`].
use std::path::PathBuf;

use tracing::debug;

use crate::lib::{errors::ValidateError, fs::visible_subdirs, telemetry};

pub mod layout;
pub mod naming;
pub mod paper;
pub mod report;

pub use layout::{check_required_paths, check_tool_dirs, DEFAULT_TOOL_DIRS, REQUIRED_PATHS};
pub use naming::{is_paper_dir_name, PAPER_DIR_PATTERN};
pub use paper::{check_paper_dir, PAPER_OPTIONAL_DIR, PAPER_REQUIRED};
pub use report::{
    render_json, render_summary, CollectingReporter, Issue, Reporter, TextReporter,
    ValidationReport, EXIT_FAILED, EXIT_OK, OK_LINE,
};

/// Inputs for one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Absolute repository root. It does not have to exist.
    pub root: PathBuf,
    pub strict: bool,
    pub tool_dirs: Vec<String>,
}

impl RunConfig {
    /// Run configuration with the default tool directories.
    pub fn new(root: PathBuf, strict: bool) -> Self {
        Self {
            root,
            strict,
            tool_dirs: DEFAULT_TOOL_DIRS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Validate the repository described by `config`.
pub fn validate(
    config: &RunConfig,
    reporter: &mut impl Reporter,
) -> Result<ValidationReport, ValidateError> {
    let root = &config.root;
    let mut report = ValidationReport::default();

    check_required_paths(root, &mut report);
    check_tool_dirs(root, &config.tool_dirs, &mut report);

    for tool in &config.tool_dirs {
        let tool_dir = root.join(tool);
        if !tool_dir.is_dir() {
            continue;
        }
        let papers = visible_subdirs(&tool_dir).map_err(|source| ValidateError::ReadDir {
            path: tool_dir.clone(),
            source,
        })?;
        debug!(
            target: "papers_lint::validator",
            tool = %tool,
            papers = papers.len(),
            "scanning tool directory"
        );
        for paper_dir in papers {
            check_paper_dir(&paper_dir, config.strict, &mut report, reporter)?;
        }
    }

    telemetry::emit_run_summary(
        root,
        config.strict,
        report.warnings.len(),
        report.errors.len(),
    );
    Ok(report)
}
