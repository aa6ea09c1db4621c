//! Path resolution helpers shared by the CLI and the validator.

use std::{
    env, io,
    path::{Component, Path, PathBuf},
};

/// Resolve `path` to an absolute path without requiring it to exist.
///
/// Existing paths are canonicalized. Missing paths are joined onto the
/// current directory and have `.`/`..` folded lexically.
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    match joined.canonicalize() {
        Ok(canonical) => Ok(canonical),
        Err(_) => Ok(normalize_lexically(&joined)),
    }
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
