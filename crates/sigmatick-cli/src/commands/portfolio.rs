//! `portfolio common` and `portfolio popular`: offline analytics over
//! ticker list files, one ticker per line.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use sigmatick_core::{common_investments, popular_investments, Symbol};

use crate::cli::{PopularArgs, PortfolioFilesArgs};
use crate::commands::CommandResult;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct CommonResponseData {
    portfolio_count: usize,
    common: Vec<Symbol>,
}

#[derive(Debug, Serialize)]
struct PopularResponseData {
    portfolio_count: usize,
    threshold: usize,
    popular: Vec<PopularEntry>,
}

#[derive(Debug, Serialize)]
struct PopularEntry {
    ticker: Symbol,
    count: usize,
}

pub fn run_common(args: &PortfolioFilesArgs) -> Result<CommandResult, CliError> {
    let portfolios = load_portfolios(&args.files)?;
    let common = common_investments(&portfolios);

    let text = if common.is_empty() {
        format!("No tickers are held in all {} portfolios.", portfolios.len())
    } else {
        let mut lines = vec![
            format!("Tickers held in all {} portfolios:", portfolios.len()),
            String::new(),
        ];
        lines.extend(common.iter().map(|symbol| format!("  {symbol}")));
        lines.join("\n")
    };

    let data = serde_json::to_value(CommonResponseData {
        portfolio_count: portfolios.len(),
        common,
    })?;
    Ok(CommandResult::ok(data, text))
}

pub fn run_popular(args: &PopularArgs) -> Result<CommandResult, CliError> {
    let portfolios = load_portfolios(&args.files)?;
    let ranked = popular_investments(&portfolios, args.threshold);

    let text = if ranked.is_empty() {
        format!(
            "No tickers are held by at least {} of the {} portfolios.",
            args.threshold,
            portfolios.len()
        )
    } else {
        let mut lines = vec![
            format!(
                "Tickers held by at least {} of the {} portfolios:",
                args.threshold,
                portfolios.len()
            ),
            String::new(),
        ];
        lines.extend(
            ranked
                .iter()
                .map(|(symbol, count)| format!("  {:<12} {count}", symbol.as_str())),
        );
        lines.join("\n")
    };

    let data = serde_json::to_value(PopularResponseData {
        portfolio_count: portfolios.len(),
        threshold: args.threshold,
        popular: ranked
            .into_iter()
            .map(|(ticker, count)| PopularEntry { ticker, count })
            .collect(),
    })?;
    Ok(CommandResult::ok(data, text))
}

fn load_portfolios(files: &[std::path::PathBuf]) -> Result<Vec<HashSet<Symbol>>, CliError> {
    files.iter().map(|path| load_portfolio(path)).collect()
}

/// One holdings file: a ticker per line, blank lines and `#` comments
/// ignored. A line that does not parse as a ticker aborts with the file
/// named, so a typo cannot silently drop a holding.
fn load_portfolio(path: &Path) -> Result<HashSet<Symbol>, CliError> {
    let contents = fs::read_to_string(path)?;
    let mut holdings = HashSet::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let symbol = Symbol::parse(line)
            .map_err(|error| CliError::Command(format!("{}: {error}", path.display())))?;
        holdings.insert(symbol);
    }

    Ok(holdings)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn write_portfolio(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("must write portfolio file");
        path
    }

    #[test]
    fn common_reports_the_shared_holdings_sorted() {
        let dir = TempDir::new().expect("must create temp dir");
        let files = vec![
            write_portfolio(&dir, "alice.txt", "aapl\nnvda\ntsla\n"),
            write_portfolio(&dir, "bob.txt", "NVDA\nAAPL\nmsft\n"),
        ];
        let args = PortfolioFilesArgs { files };

        let result = run_common(&args).expect("must analyse");

        assert_eq!(result.data["common"], json!(["AAPL", "NVDA"]));
        assert!(result.text.contains("Tickers held in all 2 portfolios:"));
        assert!(result.text.contains("  AAPL"));
        assert_eq!(result.source, "local");
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let dir = TempDir::new().expect("must create temp dir");
        let files = vec![
            write_portfolio(&dir, "a.txt", "# tech picks\n\nAAPL\n"),
            write_portfolio(&dir, "b.txt", "AAPL\n"),
        ];
        let args = PortfolioFilesArgs { files };

        let result = run_common(&args).expect("must analyse");

        assert_eq!(result.data["common"], json!(["AAPL"]));
    }

    #[test]
    fn popular_ranks_by_count_then_ticker() {
        let dir = TempDir::new().expect("must create temp dir");
        let files = vec![
            write_portfolio(&dir, "a.txt", "NVDA\nAAPL\nTSLA\n"),
            write_portfolio(&dir, "b.txt", "NVDA\nTSLA\n"),
            write_portfolio(&dir, "c.txt", "NVDA\nAAPL\n"),
        ];
        let args = PopularArgs {
            files,
            threshold: 2,
        };

        let result = run_popular(&args).expect("must analyse");

        assert_eq!(
            result.data["popular"],
            json!([
                {"ticker": "NVDA", "count": 3},
                {"ticker": "AAPL", "count": 2},
                {"ticker": "TSLA", "count": 2},
            ])
        );
        assert!(result.text.contains("NVDA         3"));
    }

    #[test]
    fn popular_below_threshold_reads_as_a_sentence() {
        let dir = TempDir::new().expect("must create temp dir");
        let files = vec![
            write_portfolio(&dir, "a.txt", "AAPL\n"),
            write_portfolio(&dir, "b.txt", "NVDA\n"),
        ];
        let args = PopularArgs {
            files,
            threshold: 2,
        };

        let result = run_popular(&args).expect("must analyse");

        assert_eq!(result.data["popular"], json!([]));
        assert!(result
            .text
            .contains("No tickers are held by at least 2 of the 2 portfolios."));
    }

    #[test]
    fn bad_ticker_names_the_offending_file() {
        let dir = TempDir::new().expect("must create temp dir");
        let files = vec![write_portfolio(&dir, "broken.txt", "AAPL\n7UP\n")];
        let args = PortfolioFilesArgs { files };

        let outcome = run_common(&args);

        match outcome {
            Err(CliError::Command(message)) => {
                assert!(message.contains("broken.txt"));
            }
            other => panic!("expected command error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let args = PortfolioFilesArgs {
            files: vec![PathBuf::from("/nonexistent/holdings.txt")],
        };

        let outcome = run_common(&args);

        assert!(matches!(outcome, Err(CliError::Io(_))));
    }
}
