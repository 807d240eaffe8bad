//! Command-line argument definitions for the `sigmatick` binary.
//!
//! # Global options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `10000` | Upstream request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! sigmatick scan AAPL --start 2024-01-02 --end 2024-06-28
//! sigmatick scan IBM --start 2024-01-02 --end 2024-06-28 --threshold 1.5 --format json
//! sigmatick portfolio common alice.txt bob.txt
//! sigmatick portfolio popular alice.txt bob.txt carol.txt --threshold 2
//! sigmatick products catalogue.csv --top 5
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report text.
    Text,
    /// Envelope-wrapped JSON on stdout.
    Json,
}

/// Market anomaly scanner and portfolio analytics from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "sigmatick",
    author,
    version,
    about = "Scan price history for anomalies and rank portfolio holdings",
    long_about = "sigmatick fetches quote history from Alpha Vantage, flags prices that sit \
more than a chosen number of standard deviations away from the period mean, and ships a \
couple of offline analytics for portfolio and catalogue files."
)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// HTTP timeout for upstream calls, in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch price history and flag anomalous closes.
    ///
    /// Examples:
    ///   sigmatick scan AAPL --start 2024-01-02 --end 2024-06-28
    ///   sigmatick scan MSFT --start 2024-01-02 --end 2024-06-28 --frequency weekly --threshold 1.5
    Scan(ScanArgs),

    /// Offline portfolio analytics over ticker list files.
    #[command(subcommand)]
    Portfolio(PortfolioCommand),

    /// Rank a product catalogue CSV by price, sales and profit.
    ///
    /// Example:
    ///   sigmatick products catalogue.csv --top 5
    Products(ProductsArgs),
}

#[derive(Debug, Subcommand)]
pub enum PortfolioCommand {
    /// List tickers held in every portfolio file.
    ///
    /// Example:
    ///   sigmatick portfolio common alice.txt bob.txt carol.txt
    Common(PortfolioFilesArgs),

    /// Rank tickers held by at least `--threshold` portfolios.
    ///
    /// Example:
    ///   sigmatick portfolio popular alice.txt bob.txt carol.txt --threshold 2
    Popular(PopularArgs),
}

#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Ticker symbol to scan, e.g. AAPL or BRK.B.
    pub symbol: String,

    /// Inclusive range start, YYYY-MM-DD.
    #[arg(long)]
    pub start: String,

    /// Inclusive range end, YYYY-MM-DD.
    #[arg(long)]
    pub end: String,

    /// Sampling frequency: daily, weekly or monthly.
    #[arg(long, default_value = "daily")]
    pub frequency: String,

    /// Price field to analyse: open, high, low, close or volume.
    #[arg(long, default_value = "close")]
    pub field: String,

    /// Anomaly threshold in standard deviations.
    #[arg(long, default_value_t = 2.0)]
    pub threshold: f64,

    /// Alpha Vantage API key; falls back to SIGMATICK_ALPHAVANTAGE_API_KEY, then "demo".
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct PortfolioFilesArgs {
    /// Portfolio files, one ticker per line.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct PopularArgs {
    /// Portfolio files, one ticker per line.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Minimum number of portfolios a ticker must appear in.
    #[arg(long, default_value_t = 2)]
    pub threshold: usize,
}

#[derive(Debug, clap::Args)]
pub struct ProductsArgs {
    /// Catalogue CSV with name, price and sales columns.
    pub file: PathBuf,

    /// How many products to show per ranking.
    #[arg(long, default_value_t = 3)]
    pub top: usize,
}
