//! Tracing initialization and validation summary events.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` on stderr; stdout is reserved for the report.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Emit the end-of-run summary to `tracing`.
pub fn emit_run_summary(root: &Path, strict: bool, warnings: usize, errors: usize) {
    info!(
        target: "papers_lint::validator",
        root = %root.display(),
        strict,
        warnings,
        errors,
        "Completed repository validation"
    );
}
