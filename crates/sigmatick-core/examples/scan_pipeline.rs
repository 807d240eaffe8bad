//! # Anomaly Scan Example
//!
//! Fetches real daily history from Alpha Vantage and walks the whole
//! pipeline: range filter, close extraction, statistics, detection and
//! the rendered report.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example scan_pipeline
//! ```
//!
//! ## Prerequisites
//!
//! Set your Alpha Vantage API key (or rely on the public demo key, which
//! only answers for showcase symbols such as IBM):
//!
//! ```bash
//! export SIGMATICK_ALPHAVANTAGE_API_KEY=your_key_here
//! ```
//!
//! ## What it demonstrates
//!
//! - Fetching a daily time series through the adapter
//! - Inclusive date-range filtering
//! - Population statistics and z-score based flagging
//! - Rendering the scan report

use sigmatick_core::{
    detect, extract_field, filter_range, validate_threshold, AlphaVantageSource, DateRange,
    Frequency, HistoryRequest, PriceField, QuoteSource, ScanReport, SeriesStats, Symbol,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbol = Symbol::parse("IBM")?;
    let frequency = Frequency::Daily;
    let field = PriceField::Close;
    let threshold = validate_threshold(2.0)?;
    let range = DateRange::parse("2024-01-02", "2024-06-28")?;

    println!("Fetching {} {} history...", symbol, frequency);
    let source = AlphaVantageSource::default();
    let snapshot = source
        .history(HistoryRequest::new(symbol.clone(), frequency))
        .await?;
    println!("Received {} raw records.\n", snapshot.len());

    let filtered = filter_range(snapshot.records, &range)?;
    let extraction = extract_field(&filtered, field);
    for point in &extraction.skipped {
        eprintln!("warning: skipped {point}");
    }

    if extraction.series.is_empty() {
        println!("No usable {} values for {symbol} in {range}.", field.as_str());
        return Ok(());
    }

    let stats = SeriesStats::from_series(&extraction.series)?;
    let anomalies = detect(&extraction.series, &stats, threshold);
    let report = ScanReport::new(
        symbol,
        frequency,
        field,
        range,
        extraction.series.len(),
        stats,
        threshold,
        &anomalies,
    );

    println!("{report}");
    Ok(())
}
