use thiserror::Error;

/// Validation and contract errors exposed by `sigmatick-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must match YYYY-MM-DD: '{value}'")]
    InvalidDateFormat { value: String },

    #[error("invalid frequency '{value}', expected one of daily, weekly, monthly")]
    InvalidFrequency { value: String },
    #[error("invalid price field '{value}', expected one of open, high, low, close, volume")]
    InvalidPriceField { value: String },

    #[error("threshold must be a finite number of standard deviations > 0, got {value}")]
    InvalidThreshold { value: f64 },

    #[error("cannot compute statistics over an empty series")]
    EmptySeries,
}
