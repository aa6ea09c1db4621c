//! Filesystem queries used by the repository checks.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Expected kind for a required path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Returns true if `path` exists and has this kind (symlinks are followed).
    pub fn matches(self, path: &Path) -> bool {
        match self {
            EntryKind::File => path.is_file(),
            EntryKind::Dir => path.is_dir(),
        }
    }
}

/// List the immediate subdirectories of `dir`, sorted by file name.
///
/// Entries whose name starts with `.` and non-directory entries are skipped.
/// A missing `dir` yields an empty list.
pub fn visible_subdirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry?;
        if is_hidden_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            out.push(path);
        }
    }
    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

/// Returns true if the entry name carries the hidden-file marker.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
