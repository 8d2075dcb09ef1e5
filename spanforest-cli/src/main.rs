//! CLI entry point for spanforest.
//!
//! Parses arguments, runs the selected command, renders its output to stdout,
//! and maps failures to a non-zero exit code after logging their stable error
//! codes.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanforest_cli::{
    cli::{Cli, CliError, render_output, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let output = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_output(&output, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_failure(&err);
            ExitCode::FAILURE
        }
    }
}

/// Logs `err` with the stable codes of any [`CliError`] in its chain.
fn log_failure(err: &anyhow::Error) {
    let cli_error = err.downcast_ref::<CliError>();
    let code = cli_error.map(|cli_error| field::display(cli_error.code()));
    let nested_code = cli_error
        .and_then(CliError::nested_code)
        .map(field::display);

    error!(
        error = %err,
        code = code,
        nested_code = nested_code,
        "command execution failed"
    );
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
