//! # Sigmatick Core
//!
//! Domain types, scan pipeline and catalogue analytics for the Sigmatick
//! toolkit.
//!
//! ## Overview
//!
//! The crate is built around one pipeline: fetch a symbol's quote history,
//! restrict it to a date window, extract a price field, compute population
//! statistics and flag the dates that sit further than `k` standard
//! deviations from the mean. Around that sit the portfolio and catalogue
//! analytics the CLI exposes as separate commands.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Quote-source adapters (Alpha Vantage) |
//! | [`anomaly`] | Threshold detection over a price series |
//! | [`catalog`] | Product catalogue CSV ingestion and top-k rankings |
//! | [`domain`] | Symbols, dates, frequencies, fields, series |
//! | [`envelope`] | Response envelope for machine-readable output |
//! | [`error`] | Validation errors |
//! | [`filter`] | Inclusive date-range restriction |
//! | [`http_client`] | Transport abstraction over reqwest |
//! | [`portfolio`] | Cross-portfolio holdings analysis |
//! | [`quote_source`] | Upstream boundary trait and source errors |
//! | [`report`] | Scan report assembly and rendering |
//! | [`stats`] | Mean and population standard deviation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sigmatick_core::{
//!     detect, extract_field, filter_range, AlphaVantageSource, DateRange, Frequency,
//!     HistoryRequest, PriceField, QuoteSource, ScanReport, SeriesStats, Symbol,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = AlphaVantageSource::default();
//!     let symbol = Symbol::parse("IBM")?;
//!     let request = HistoryRequest::new(symbol.clone(), Frequency::Daily);
//!
//!     let snapshot = source.history(request).await?;
//!     let range = DateRange::parse("2024-01-01", "2024-06-30")?;
//!     let records = filter_range(snapshot.records, &range)?;
//!     let extraction = extract_field(&records, PriceField::Close);
//!
//!     let stats = SeriesStats::from_series(&extraction.series)?;
//!     let anomalies = detect(&extraction.series, &stats, 2.0);
//!
//!     let report = ScanReport::new(
//!         symbol,
//!         Frequency::Daily,
//!         PriceField::Close,
//!         range,
//!         extraction.series.len(),
//!         stats,
//!         2.0,
//!         &anomalies,
//!     );
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Boundary parsing returns [`ValidationError`]; adapters return
//! [`SourceError`] with a stable machine code per kind:
//!
//! ```rust
//! use sigmatick_core::{SourceError, SourceErrorKind};
//!
//! fn describe(error: &SourceError) -> &'static str {
//!     match error.kind() {
//!         SourceErrorKind::FetchFailure => "transport or body problem, worth retrying",
//!         SourceErrorKind::Upstream => "the API answered with an error marker",
//!         SourceErrorKind::MissingSeries => "response had no time-series object",
//!         SourceErrorKind::InvalidRequest => "rejected before any call was made",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is taken from the CLI flag or environment, never logged
//! - Symbols and dates are validated before they reach a URL

pub mod adapters;
pub mod anomaly;
pub mod catalog;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod portfolio;
pub mod quote_source;
pub mod report;
pub mod stats;

// Re-export commonly used types at crate root for convenience

pub use adapters::{find_series_key, AlphaVantageSource, SeriesKey, API_KEY_ENV};

pub use anomaly::{detect, validate_threshold, AnomalySet};

pub use catalog::{
    bestsellers, most_expensive, most_profitable, read_products, CatalogError, Product,
    TopProductsReport,
};

pub use domain::{
    extract_field, DateRange, Extraction, Frequency, PriceField, PriceRecord, PriceSeries,
    SkipReason, SkippedPoint, Symbol, TradeDate,
};

pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};

pub use error::ValidationError;

pub use filter::filter_range;

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
    DEFAULT_TIMEOUT_MS,
};

pub use portfolio::{common_investments, popular_investments};

pub use quote_source::{
    HistoryRequest, HistorySnapshot, QuoteSource, SourceError, SourceErrorKind,
};

pub use report::{AnomalyLine, Direction, ScanReport};

pub use stats::SeriesStats;
