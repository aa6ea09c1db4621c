//! Top-level required paths and tool directories.

use std::path::Path;

use tracing::debug;

use super::report::ValidationReport;
use crate::lib::fs::EntryKind;

/// Tool directories expected at the repository root, in check order.
pub const DEFAULT_TOOL_DIRS: [&str; 3] = ["molsysmt", "molsysviewer", "molsys-ai"];

/// Required top-level paths relative to the repository root.
pub const REQUIRED_PATHS: [(&str, EntryKind); 5] = [
    ("README.md", EntryKind::File),
    ("CONTRIBUTING.md", EntryKind::File),
    ("templates", EntryKind::Dir),
    ("templates/paper-README.md", EntryKind::File),
    ("templates/structure.txt", EntryKind::File),
];

/// Record one error per required path that is missing or of the wrong kind.
pub fn check_required_paths(root: &Path, report: &mut ValidationReport) {
    for (relative, kind) in REQUIRED_PATHS {
        require(&root.join(relative), kind, report);
    }
}

/// Record one error per tool directory that is missing or not a directory.
pub fn check_tool_dirs<S: AsRef<str>>(root: &Path, tools: &[S], report: &mut ValidationReport) {
    for tool in tools {
        require(&root.join(tool.as_ref()), EntryKind::Dir, report);
    }
}

fn require(path: &Path, kind: EntryKind, report: &mut ValidationReport) {
    if kind.matches(path) {
        debug!(target: "papers_lint::validator", path = %path.display(), "present");
        return;
    }
    let message = match kind {
        EntryKind::File => format!("Missing required file: {}", path.display()),
        EntryKind::Dir => format!("Missing required directory: {}", path.display()),
    };
    report.error(message);
}
