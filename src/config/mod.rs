//! Load and validate the optional `papers-lint.toml` configuration.
use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod repository;
pub mod telemetry;

pub use repository::{
    parse_repository_section, parse_validation_section, RawRepositorySection,
    RawValidationSection, RepositorySection, ValidationSection,
};

pub const CONFIG_ENV_KEY: &str = "PAPERS_LINT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "papers-lint.toml";

/// Where the configuration file path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    RepoRoot,
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintConfig {
    pub repository: RepositorySection,
    pub validation: ValidationSection,
    /// `None` when built-in defaults are used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLintConfig {
    repository: Option<RawRepositorySection>,
    validation: Option<RawValidationSection>,
}

impl LintConfig {
    /// Resolve in the order: `--config` → `PAPERS_LINT_CONFIG` → `<root>/papers-lint.toml`.
    ///
    /// Falls back to defaults only when no file was named and none exists at the root.
    pub fn load(override_path: Option<PathBuf>, root: &Path) -> Result<Self, ConfigError> {
        let env_path = env::var_os(CONFIG_ENV_KEY)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        match locate(override_path, env_path, root) {
            Some((path, source)) => {
                telemetry::log_source(&path, source);
                Self::load_from_path(path)
            }
            None => {
                telemetry::log_defaults(root);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let source = config::File::new(&path.to_string_lossy(), config::FileFormat::Toml);
        let document = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(|err| {
                let error = ConfigError::from_read_error(path.clone(), err);
                error!(
                    target: "papers_lint::config",
                    path = %path.display(),
                    reason = %error,
                    "Failed to read configuration file"
                );
                error
            })?;

        let raw: RawLintConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "papers_lint::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "papers_lint::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLintConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let repository = parse_repository_section(raw.repository, &path)?;
        let validation = parse_validation_section(raw.validation);

        Ok(Self {
            repository,
            validation,
            source_path: Some(path),
        })
    }
}

fn locate(
    override_path: Option<PathBuf>,
    env_path: Option<PathBuf>,
    root: &Path,
) -> Option<(PathBuf, ConfigSource)> {
    if let Some(path) = override_path {
        return Some((path, ConfigSource::Cli));
    }
    if let Some(path) = env_path {
        return Some((path, ConfigSource::Env));
    }
    let at_root = root.join(DEFAULT_CONFIG_FILE);
    at_root
        .is_file()
        .then_some((at_root, ConfigSource::RepoRoot))
}
