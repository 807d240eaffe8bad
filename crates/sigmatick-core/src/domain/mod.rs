//! # Domain Models
//!
//! Strongly-typed domain vocabulary for Sigmatick quote histories.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, uppercase ticker |
//! | [`TradeDate`] | Strict `YYYY-MM-DD` calendar date |
//! | [`DateRange`] | Inclusive trading-date window |
//! | [`Frequency`] | Daily / weekly / monthly sampling |
//! | [`PriceField`] | open / high / low / close / volume |
//! | [`PriceRecord`] | Raw per-date field map from the upstream |
//! | [`PriceSeries`] | Date-ordered numeric series |
//! | [`Extraction`] | Series plus per-date skip diagnostics |
//!
//! Parsing constructors validate at the boundary; once a value exists it is
//! known good, and downstream code does not re-check it.

mod frequency;
mod price_field;
mod series;
mod symbol;
mod trade_date;

pub use frequency::Frequency;
pub use price_field::PriceField;
pub use series::{extract_field, Extraction, PriceRecord, PriceSeries, SkipReason, SkippedPoint};
pub use symbol::Symbol;
pub use trade_date::{DateRange, TradeDate};
