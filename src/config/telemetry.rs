use std::path::Path;

use tracing::{debug, info};

use super::{ConfigSource, LintConfig, DEFAULT_CONFIG_FILE};

pub fn log_source(path: &Path, source: ConfigSource) {
    match source {
        ConfigSource::Cli => info!(
            target: "papers_lint::config",
            path = %path.display(),
            "Loading configuration given by --config"
        ),
        ConfigSource::Env => info!(
            target: "papers_lint::config",
            path = %path.display(),
            "Loading configuration using PAPERS_LINT_CONFIG environment variable"
        ),
        ConfigSource::RepoRoot => debug!(
            target: "papers_lint::config",
            path = %path.display(),
            "Loading configuration found at repository root"
        ),
    }
}

pub fn log_defaults(root: &Path) {
    debug!(
        target: "papers_lint::config",
        root = %root.display(),
        file = DEFAULT_CONFIG_FILE,
        "No configuration file; using built-in defaults"
    );
}

pub fn log_loaded(config: &LintConfig) {
    info!(
        target: "papers_lint::config",
        path = %config.source_path.as_deref().unwrap_or(Path::new("")).display(),
        tool_dirs = ?config.repository.tool_dirs,
        strict = config.validation.strict,
        "Configuration file loaded successfully"
    );
}
