//! Behavior tests for the full anomaly-scan pipeline: fetch a canned
//! history, filter the range, extract a field, compute statistics, flag
//! outliers and render the report.

use std::sync::Arc;

use sigmatick_tests::{
    daily_body, detect, extract_field, filter_range, source_with_body, weekly_body,
    AlphaVantageSource, CannedHttpClient, DateRange, Frequency, HistoryRequest, PriceField,
    QuoteSource, ScanReport, SeriesStats, SkipReason, Symbol, TradeDate,
};

/// Seven trading days of flat closes with one planted spike on 2024-01-08.
const FIXTURE: &[(&str, &str)] = &[
    ("2024-01-02", "100.00"),
    ("2024-01-03", "100.00"),
    ("2024-01-04", "100.00"),
    ("2024-01-05", "100.00"),
    ("2024-01-08", "130.00"),
    ("2024-01-09", "100.00"),
    ("2024-01-10", "100.00"),
];

fn date(input: &str) -> TradeDate {
    TradeDate::parse(input).expect("must parse")
}

// =============================================================================
// Fetching and decoding
// =============================================================================

#[tokio::test]
async fn daily_request_url_names_the_function_symbol_and_key() {
    // Given: an adapter over a recording transport
    let client = Arc::new(CannedHttpClient::with_body(daily_body(FIXTURE)));
    let source = AlphaVantageSource::with_http_client(client.clone(), "secret-key");

    // When: a daily history is fetched
    let request = HistoryRequest::new(Symbol::parse("IBM").expect("valid"), Frequency::Daily);
    let snapshot = source.history(request).await.expect("fetch must succeed");

    // Then: the query string carries the whole request, full output included
    let urls = client.requested_urls();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].contains("function=TIME_SERIES_DAILY"));
    assert!(urls[0].contains("symbol=IBM"));
    assert!(urls[0].contains("outputsize=full"));
    assert!(urls[0].contains("apikey=secret-key"));
    assert_eq!(snapshot.len(), 7);
}

#[tokio::test]
async fn weekly_request_omits_the_outputsize_parameter() {
    let client = Arc::new(CannedHttpClient::with_body(weekly_body(&[
        ("2024-01-05", "101.00"),
        ("2024-01-12", "102.00"),
    ])));
    let source = AlphaVantageSource::with_http_client(client.clone(), "secret-key");

    let request = HistoryRequest::new(Symbol::parse("IBM").expect("valid"), Frequency::Weekly);
    let snapshot = source.history(request).await.expect("fetch must succeed");

    let urls = client.requested_urls();
    assert!(urls[0].contains("function=TIME_SERIES_WEEKLY"));
    assert!(!urls[0].contains("outputsize"));
    assert_eq!(snapshot.len(), 2);
}

// =============================================================================
// End-to-end scan
// =============================================================================

#[tokio::test]
async fn full_scan_flags_the_planted_spike_and_renders_it() {
    // Given: a January history with one 30-point spike
    let source = source_with_body(daily_body(FIXTURE));
    let symbol = Symbol::parse("TEST").expect("valid");

    // When: the whole pipeline runs at 2 standard deviations
    let snapshot = source
        .history(HistoryRequest::new(symbol.clone(), Frequency::Daily))
        .await
        .expect("fetch must succeed");
    let range = DateRange::parse("2024-01-01", "2024-01-31").expect("valid range");
    let filtered = filter_range(snapshot.records, &range).expect("dates must parse");
    let extraction = extract_field(&filtered, PriceField::Close);
    let stats = SeriesStats::from_series(&extraction.series).expect("non-empty series");
    let anomalies = detect(&extraction.series, &stats, 2.0);

    // Then: only the spike is flagged
    assert_eq!(anomalies.len(), 1);
    assert!(anomalies.contains(date("2024-01-08")));

    // And: the report carries the numbers a reader would check by hand
    let report = ScanReport::new(
        symbol,
        Frequency::Daily,
        PriceField::Close,
        range,
        extraction.series.len(),
        stats,
        2.0,
        &anomalies,
    );
    let rendered = report.render();
    assert!(rendered.contains("Data points : 7"));
    assert!(rendered.contains("Mean        : 104.29"));
    assert!(rendered.contains("Std dev     : 10.50"));
    assert!(rendered.contains("1 anomaly detected:"));
    assert!(rendered.contains("2024-01-08  ↑  130.00  (z = +2.45)"));
}

#[tokio::test]
async fn date_range_bounds_are_inclusive_on_both_ends() {
    let source = source_with_body(daily_body(FIXTURE));

    let snapshot = source
        .history(HistoryRequest::new(
            Symbol::parse("TEST").expect("valid"),
            Frequency::Daily,
        ))
        .await
        .expect("fetch must succeed");
    let range = DateRange::parse("2024-01-03", "2024-01-09").expect("valid range");
    let filtered = filter_range(snapshot.records, &range).expect("dates must parse");
    let extraction = extract_field(&filtered, PriceField::Close);

    assert_eq!(extraction.series.len(), 5);
    assert!(extraction.series.get(date("2024-01-03")).is_some());
    assert!(extraction.series.get(date("2024-01-09")).is_some());
    assert!(extraction.series.get(date("2024-01-02")).is_none());
    assert!(extraction.series.get(date("2024-01-10")).is_none());
}

#[tokio::test]
async fn inverted_range_selects_nothing() {
    let source = source_with_body(daily_body(FIXTURE));

    let snapshot = source
        .history(HistoryRequest::new(
            Symbol::parse("TEST").expect("valid"),
            Frequency::Daily,
        ))
        .await
        .expect("fetch must succeed");
    let range = DateRange::parse("2024-02-01", "2024-01-01").expect("range parses even inverted");
    let filtered = filter_range(snapshot.records, &range).expect("dates must parse");

    assert!(range.is_empty());
    assert!(filtered.is_empty());
}

// =============================================================================
// Irregular records
// =============================================================================

#[tokio::test]
async fn missing_or_unreadable_closes_are_skipped_not_fatal() {
    // Given: a history where one date lacks a close and another has garbage
    let body = serde_json::json!({
        "Time Series (Daily)": {
            "2024-01-02": { "4. close": "100.00" },
            "2024-01-03": { "1. open": "99.10" },
            "2024-01-04": { "4. close": "not-a-number" },
            "2024-01-05": { "4. close": "101.00" }
        }
    })
    .to_string();
    let source = source_with_body(body);

    // When: the series is filtered and extracted
    let snapshot = source
        .history(HistoryRequest::new(
            Symbol::parse("TEST").expect("valid"),
            Frequency::Daily,
        ))
        .await
        .expect("fetch must succeed");
    let range = DateRange::parse("2024-01-01", "2024-01-31").expect("valid range");
    let filtered = filter_range(snapshot.records, &range).expect("dates must parse");
    let extraction = extract_field(&filtered, PriceField::Close);

    // Then: the usable points survive and each skip names its reason
    assert_eq!(extraction.series.len(), 2);
    assert_eq!(extraction.skipped.len(), 2);
    assert_eq!(extraction.skipped[0].date, date("2024-01-03"));
    assert_eq!(extraction.skipped[0].reason, SkipReason::MissingField);
    assert_eq!(extraction.skipped[1].date, date("2024-01-04"));
    assert_eq!(extraction.skipped[1].reason, SkipReason::NonNumericValue);
}

#[tokio::test]
async fn flat_series_yields_zero_deviation_and_no_anomalies() {
    let body = daily_body(&[
        ("2024-01-02", "100.00"),
        ("2024-01-03", "100.00"),
        ("2024-01-04", "100.00"),
    ]);
    let source = source_with_body(body);

    let snapshot = source
        .history(HistoryRequest::new(
            Symbol::parse("TEST").expect("valid"),
            Frequency::Daily,
        ))
        .await
        .expect("fetch must succeed");
    let range = DateRange::parse("2024-01-01", "2024-01-31").expect("valid range");
    let filtered = filter_range(snapshot.records, &range).expect("dates must parse");
    let extraction = extract_field(&filtered, PriceField::Close);
    let stats = SeriesStats::from_series(&extraction.series).expect("non-empty series");

    assert_eq!(stats.std_dev, 0.0);
    // 0 > k * 0 never holds, so even a tiny threshold flags nothing
    assert!(detect(&extraction.series, &stats, 0.25).is_empty());
    assert!(stats.z_score(100.0).is_none());
}
