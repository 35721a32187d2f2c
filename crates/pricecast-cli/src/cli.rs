//! CLI argument definitions for pricecast.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `project` | Overlay observed closes against scenario target paths |
//! | `history` | Fetch the in-window close history without projecting |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//!
//! Every value flag falls back to a `PRICECAST_*` environment variable and
//! then to a built-in default; only the symbol and the API key are required.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Scenario price projection CLI.
///
/// Computes linear expected/bull/bear price paths for a single instrument
/// over a configured date window and aligns them with observed daily closes.
#[derive(Debug, Parser)]
#[command(
    name = "pricecast",
    author,
    version,
    about = "Scenario price projection CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Project scenario target paths over observed closes.
    ///
    /// # Examples
    ///
    ///   pricecast project TSLA --expected 2000 --bull 2500 --bear 1400
    ///   pricecast project --start-year 2023 --end-year 2027 --format json
    Project(ProjectArgs),

    /// Fetch the in-window close history without projecting.
    ///
    /// # Examples
    ///
    ///   pricecast history TSLA --start-year 2023 --end-year 2023
    History(HistoryArgs),
}

/// Arguments for the `project` command.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Market symbol (e.g., TSLA). Falls back to PRICECAST_SYMBOL.
    pub symbol: Option<String>,

    /// First calendar year of the window; the window starts January 1.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last calendar year of the window; the window ends December 31.
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Expected-scenario terminal price.
    #[arg(long)]
    pub expected: Option<f64>,

    /// Bull-scenario terminal price.
    #[arg(long)]
    pub bull: Option<f64>,

    /// Bear-scenario terminal price.
    #[arg(long)]
    pub bear: Option<f64>,

    /// Price-axis tick spacing.
    #[arg(long)]
    pub price_step: Option<u32>,

    /// Date-axis tick spacing in days.
    #[arg(long)]
    pub date_step: Option<u32>,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Market symbol (e.g., TSLA). Falls back to PRICECAST_SYMBOL.
    pub symbol: Option<String>,

    /// First calendar year of the window; the window starts January 1.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last calendar year of the window; the window ends December 31.
    #[arg(long)]
    pub end_year: Option<i32>,
}
