//! CLI argument definitions and `RunConfig` construction.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::{resolve_repo_root, OutputFormat, RunProfile};
use crate::{config::LintConfig, validator::RunConfig};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "papers-lint",
    author,
    version,
    about = "Validate papers repository structure.",
    long_about = None
)]
pub struct LintArgs {
    /// Repository root (default: .)
    #[arg(long = "repo-root", value_name = "PATH", default_value = ".")]
    pub repo_root: PathBuf,
    /// Stricter checks (recommended for CI).
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// Path to papers-lint.toml (overrides PAPERS_LINT_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl LintArgs {
    /// Resolve the repository root, load configuration, and merge CLI flags.
    pub fn into_profile(self) -> Result<RunProfile> {
        let root = resolve_repo_root(&self.repo_root)?;
        let config = LintConfig::load(self.config_override, &root)
            .context("failed to load papers-lint configuration")?;

        let run = RunConfig {
            root,
            strict: self.strict || config.validation.strict,
            tool_dirs: config.repository.tool_dirs,
        };

        Ok(RunProfile {
            run,
            format: self.format,
            config_path: config.source_path,
        })
    }
}
