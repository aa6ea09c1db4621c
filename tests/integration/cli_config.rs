use std::fs;

use tempfile::tempdir;

use crate::common::{canonical, run_lint, run_on, scaffold_repo, stdout_lines};

#[test]
fn root_config_replaces_tool_dirs() {
    let temp = tempdir().expect("can create temporary directory");
    scaffold_repo(temp.path());
    fs::write(
        temp.path().join("papers-lint.toml"),
        "[repository]\ntool_dirs = [\"molsysmt\", \"openmm-tools\"]\n",
    )
    .expect("can write config");

    let output = run_on(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec![format!(
            "ERROR: Missing required directory: {}",
            canonical(temp.path()).join("openmm-tools").display()
        )]
    );
}

#[test]
fn config_strict_enables_strict_checks() {
    let temp = tempdir().expect("can create temporary directory");
    scaffold_repo(temp.path());
    fs::create_dir_all(temp.path().join("molsysmt/Draft")).expect("can create dir");
    let config = temp.path().join("ci.toml");
    fs::write(&config, "[validation]\nstrict = true\n").expect("can write config");

    let output = run_on(temp.path(), &["--config", &config.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_lines(&output)
        .last()
        .is_some_and(|l| l.ends_with("invalid paper directory name")));
}

#[test]
fn invalid_config_is_a_fault() {
    let temp = tempdir().expect("can create temporary directory");
    scaffold_repo(temp.path());
    fs::write(
        temp.path().join("papers-lint.toml"),
        "[repository]\ntool_dirs = [\"../escape\"]\n",
    )
    .expect("can write config");

    let output = run_on(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("repository.tool_dirs"), "stderr:\n{stderr}");
}

#[test]
fn missing_explicit_config_is_a_fault() {
    let temp = tempdir().expect("can create temporary directory");
    let missing = temp.path().join("nope.toml");

    let output = run_lint(&[
        "--repo-root",
        &temp.path().to_string_lossy(),
        "--config",
        &missing.to_string_lossy(),
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn help_lists_flags() {
    let output = run_lint(&["--help"]);
    assert!(output.status.success(), "--help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["--repo-root", "--strict", "--config", "--format"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}
