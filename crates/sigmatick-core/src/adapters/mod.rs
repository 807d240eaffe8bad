//! Provider adapters implementing the [`QuoteSource`](crate::QuoteSource)
//! boundary.

mod alphavantage;

pub use alphavantage::{find_series_key, AlphaVantageSource, SeriesKey, API_KEY_ENV};
