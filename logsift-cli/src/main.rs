//! Logsift CLI entry point
//!
//! Wires argument parsing, diagnostic logging, and the report flow together.
//! Failure messages go to stderr; exit codes follow `CliError::exit_code()`
//! so scripts can branch on the failure kind alone.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::OutputWriter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let path = cli.path.as_deref().ok_or_else(|| {
        CliError::Usage("please provide a log file path as a command line argument".to_owned())
    })?;

    let level = cli
        .level
        .as_deref()
        .map(commands::report::parse_level)
        .transpose()?;

    let writer = OutputWriter::new(cli.output);
    commands::report::execute(path, level, &writer)
}
