//! # Portfolio and Catalogue Analytics Example
//!
//! Runs the offline analytics end to end: shared holdings across several
//! portfolios, a popularity ranking, and the three catalogue rankings.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example portfolio_analysis
//! ```
//!
//! ## What it demonstrates
//!
//! - Intersection of holdings across portfolios
//! - Popularity ranking with a minimum-holder threshold
//! - Top-k products by price, sales and profit

use std::collections::HashSet;

use sigmatick_core::{
    common_investments, popular_investments, Product, Symbol, TopProductsReport,
};

fn portfolio(tickers: &[&str]) -> Result<HashSet<Symbol>, Box<dyn std::error::Error>> {
    let mut holdings = HashSet::new();
    for ticker in tickers {
        holdings.insert(Symbol::parse(ticker)?);
    }
    Ok(holdings)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let portfolios = vec![
        portfolio(&["AAPL", "NVDA", "TSLA", "AMZN"])?,
        portfolio(&["NVDA", "MSFT", "AAPL"])?,
        portfolio(&["NVDA", "AAPL", "GOOG", "TSLA"])?,
    ];

    println!("Tickers held in all {} portfolios:", portfolios.len());
    for symbol in common_investments(&portfolios) {
        println!("  {symbol}");
    }

    println!("\nTickers held by at least 2 portfolios:");
    for (symbol, count) in popular_investments(&portfolios, 2) {
        println!("  {:<12} {count}", symbol.as_str());
    }

    let products = vec![
        Product::new("Espresso machine", 349.00, 210),
        Product::new("Coffee grinder", 129.50, 340),
        Product::new("Pour-over kit", 42.00, 510),
        Product::new("Filter papers", 6.99, 2150),
        Product::new("Travel mug", 24.95, 880),
        Product::new("Milk frother", 39.99, 425),
    ];

    let report = TopProductsReport::build(&products, 3)?;
    println!("\n{report}");
    Ok(())
}
