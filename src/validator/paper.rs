//! Checks for a single paper directory.

use std::path::Path;

use tracing::debug;

use super::{
    naming::is_paper_dir_name,
    report::{Issue, Reporter, ValidationReport},
};
use crate::lib::{errors::ValidateError, fs::EntryKind};

/// Required entries inside every paper directory.
pub const PAPER_REQUIRED: [(&str, EntryKind); 4] = [
    ("README.md", EntryKind::File),
    ("manuscript", EntryKind::Dir),
    ("figures", EntryKind::Dir),
    ("bibliography", EntryKind::Dir),
];

/// Recommended directory; only reported in strict mode, and only as a warning.
pub const PAPER_OPTIONAL_DIR: &str = "artifacts";

/// Check the name of `paper_dir`, then its contents.
///
/// A name mismatch is always a warning. In strict mode it is also an error
/// and the contents are not inspected.
pub fn check_paper_dir(
    paper_dir: &Path,
    strict: bool,
    report: &mut ValidationReport,
    reporter: &mut impl Reporter,
) -> Result<(), ValidateError> {
    let name = paper_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !is_paper_dir_name(&name) {
        warn(
            format!(
                "{}: directory name does not match 'YYYY-slug' (e.g. 2026-molsysmt-foundation).",
                paper_dir.display()
            ),
            report,
            reporter,
        )?;
        if strict {
            report.error(format!("{}: invalid paper directory name", paper_dir.display()));
            return Ok(());
        }
    }

    check_paper_contents(paper_dir, strict, report, reporter)
}

fn check_paper_contents(
    paper_dir: &Path,
    strict: bool,
    report: &mut ValidationReport,
    reporter: &mut impl Reporter,
) -> Result<(), ValidateError> {
    for (relative, kind) in PAPER_REQUIRED {
        if kind.matches(&paper_dir.join(relative)) {
            continue;
        }
        match kind {
            EntryKind::File => report.error(format!("{}: missing {relative}", paper_dir.display())),
            EntryKind::Dir => report.error(format!(
                "{}: missing directory {relative}/",
                paper_dir.display()
            )),
        }
    }

    if strict && !EntryKind::Dir.matches(&paper_dir.join(PAPER_OPTIONAL_DIR)) {
        warn(
            format!(
                "{}: {PAPER_OPTIONAL_DIR}/ is recommended (strict mode expects it).",
                paper_dir.display()
            ),
            report,
            reporter,
        )?;
    }

    debug!(
        target: "papers_lint::validator",
        paper = %paper_dir.display(),
        errors = report.errors.len(),
        "checked paper directory"
    );
    Ok(())
}

fn warn(
    message: String,
    report: &mut ValidationReport,
    reporter: &mut impl Reporter,
) -> Result<(), ValidateError> {
    let issue = Issue::new(message);
    reporter.warning(&issue)?;
    report.warnings.push(issue);
    Ok(())
}
