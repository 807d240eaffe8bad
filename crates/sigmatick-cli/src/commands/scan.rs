//! `scan` command: fetch history, filter the range, extract a field and
//! report anomalous prices.

use std::time::Instant;

use serde_json::Value;
use sigmatick_core::{
    detect, extract_field, filter_range, validate_threshold, AlphaVantageSource, DateRange,
    Frequency, HistoryRequest, PriceField, QuoteSource, ScanReport, SeriesStats, Symbol,
};

use crate::cli::ScanArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub async fn run(args: &ScanArgs, timeout_ms: u64) -> Result<CommandResult, CliError> {
    let source = match &args.api_key {
        Some(key) => AlphaVantageSource::with_api_key(key),
        None => AlphaVantageSource::default(),
    }
    .with_timeout_ms(timeout_ms);

    run_with_source(args, &source).await
}

/// Command body with the quote source injected, so tests can run the whole
/// pipeline against a stub transport.
pub(crate) async fn run_with_source(
    args: &ScanArgs,
    source: &dyn QuoteSource,
) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let frequency: Frequency = args.frequency.parse()?;
    let field: PriceField = args.field.parse()?;
    let threshold = validate_threshold(args.threshold)?;
    let range = DateRange::parse(&args.start, &args.end)?;

    let started = Instant::now();
    let fetched = source
        .history(HistoryRequest::new(symbol.clone(), frequency))
        .await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let snapshot = match fetched {
        Ok(snapshot) => snapshot,
        Err(error) => {
            let text = format!("No data retrieved: {}.", error.message());
            return Ok(CommandResult::failed(&error, text)
                .with_source(source.id())
                .with_latency_ms(latency_ms));
        }
    };

    let filtered = filter_range(snapshot.records, &range)?;
    let extraction = extract_field(&filtered, field);

    let mut result = if extraction.series.is_empty() {
        let text = format!(
            "No usable {} values for {symbol} in {range}.",
            field.as_str()
        );
        CommandResult::ok(Value::Null, text)
    } else {
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
        let data = serde_json::to_value(&report)?;
        CommandResult::ok(data, report.render())
    };

    result = result.with_source(source.id()).with_latency_ms(latency_ms);
    for point in &extraction.skipped {
        result = result.with_warning(format!("skipped {point}"));
    }

    Ok(result)
}
