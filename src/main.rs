//! Entry point for papers-lint.
use std::process::ExitCode;

use clap::Parser;
use papers_lint::{
    cli::{execute_stdout, LintArgs, RunExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => ExitCode::from(code),
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<u8, RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = LintArgs::parse();
    let profile = args.into_profile().map_err(RunExit::from_error)?;
    execute_stdout(&profile).map_err(RunExit::from_error)
}
