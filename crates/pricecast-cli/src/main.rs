mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let output = commands::run(&cli).await?;
    output::render(&output, cli.format, cli.pretty)
}
