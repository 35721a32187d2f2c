mod history;
mod project;

use pricecast_core::ChartData;

pub use history::HistoryReport;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Typed result of one command, handed to the output renderer.
pub enum CommandOutput {
    Chart(ChartData),
    History(HistoryReport),
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    match &cli.command {
        Command::Project(args) => project::run(args, cli.timeout_ms).await,
        Command::History(args) => history::run(args, cli.timeout_ms).await,
    }
}
