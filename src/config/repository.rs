use std::{collections::HashSet, path::Path};

use serde::Deserialize;

use crate::{lib::errors::ConfigError, validator::DEFAULT_TOOL_DIRS};

/// `[repository]` settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySection {
    pub tool_dirs: Vec<String>,
}

impl Default for RepositorySection {
    fn default() -> Self {
        Self {
            tool_dirs: DEFAULT_TOOL_DIRS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRepositorySection {
    pub tool_dirs: Option<Vec<String>>,
}

/// `[validation]` settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSection {
    pub strict: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawValidationSection {
    pub strict: Option<bool>,
}

pub fn parse_repository_section(
    raw: Option<RawRepositorySection>,
    path: &Path,
) -> Result<RepositorySection, ConfigError> {
    let Some(tool_dirs) = raw.unwrap_or_default().tool_dirs else {
        return Ok(RepositorySection::default());
    };

    let mut seen = HashSet::new();
    for name in &tool_dirs {
        validate_tool_dir_name(name, path)?;
        if !seen.insert(name.as_str()) {
            return Err(invalid_tool_dirs(
                path,
                format!("`{name}` is listed more than once"),
            ));
        }
    }
    Ok(RepositorySection { tool_dirs })
}

pub fn parse_validation_section(raw: Option<RawValidationSection>) -> ValidationSection {
    ValidationSection {
        strict: raw.unwrap_or_default().strict.unwrap_or(false),
    }
}

fn validate_tool_dir_name(name: &str, path: &Path) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(invalid_tool_dirs(path, "entries must not be empty".into()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid_tool_dirs(
            path,
            format!("`{name}` must be a single directory name"),
        ));
    }
    if name.starts_with('.') {
        return Err(invalid_tool_dirs(
            path,
            format!("`{name}` must not start with `.`"),
        ));
    }
    Ok(())
}

fn invalid_tool_dirs(path: &Path, message: String) -> ConfigError {
    ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "repository.tool_dirs",
        message,
    }
}
