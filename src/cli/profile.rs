//! RunProfile and repository root resolution.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::{lib::paths, validator::RunConfig};

/// Report format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Everything a run needs once arguments and configuration are merged.
#[derive(Debug, Clone)]
pub struct RunProfile {
    pub run: RunConfig,
    pub format: OutputFormat,
    pub config_path: Option<PathBuf>,
}

/// Resolve `--repo-root` to an absolute path; the directory need not exist.
pub fn resolve_repo_root(raw: &Path) -> Result<PathBuf> {
    paths::resolve_absolute(raw)
        .with_context(|| format!("failed to resolve repository root {}", raw.display()))
}
