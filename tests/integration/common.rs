use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_papers-lint");
pub const TOOL_DIRS: [&str; 3] = ["molsysmt", "molsysviewer", "molsys-ai"];

/// Run the linter with a clean configuration environment.
pub fn run_lint(args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .env_remove("PAPERS_LINT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("papers-lint should run")
}

pub fn run_on(root: &Path, extra: &[&str]) -> Output {
    let root = root.to_string_lossy().into_owned();
    let mut args = vec!["--repo-root", root.as_str()];
    args.extend_from_slice(extra);
    run_lint(&args)
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("can create parent directory");
    }
    fs::write(path, "").expect("can write file");
}

/// Create all required top-level files and tool directories.
pub fn scaffold_repo(root: &Path) {
    touch(&root.join("README.md"));
    touch(&root.join("CONTRIBUTING.md"));
    touch(&root.join("templates/paper-README.md"));
    touch(&root.join("templates/structure.txt"));
    for tool in TOOL_DIRS {
        fs::create_dir_all(root.join(tool)).expect("can create tool directory");
    }
}

/// Create a paper directory with the required entries.
pub fn add_paper(root: &Path, tool: &str, name: &str) -> PathBuf {
    let dir = root.join(tool).join(name);
    touch(&dir.join("README.md"));
    for sub in ["manuscript", "figures", "bibliography"] {
        fs::create_dir_all(dir.join(sub)).expect("can create paper subdirectory");
    }
    dir
}

/// Absolute, canonical form of a temp root as the binary prints it.
pub fn canonical(root: &Path) -> PathBuf {
    root.canonicalize().expect("temp root should canonicalize")
}
