//! `sigmatick` binary entry point.
//!
//! Exit codes: 0 on success, 2 for invalid input or catalogue problems,
//! 3 when the upstream fetch failed (the envelope carries the detail),
//! 4 for serialization errors, 10 for filesystem errors.

mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let outcome = commands::run(cli).await?;
    let rendered = output::render(&outcome, cli.format, cli.pretty)?;
    println!("{rendered}");

    if outcome.envelope.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(3))
    }
}
