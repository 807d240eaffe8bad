//! Quote-source boundary: the contract upstream adapters implement and the
//! structured errors they surface.
//!
//! A source is asked for one symbol's full history at a sampling frequency
//! and answers with the raw date-keyed records. Range filtering, field
//! extraction and statistics all happen on this side of the boundary, so an
//! adapter only has to know how to fetch and locate the series object.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{Frequency, PriceRecord, Symbol};

/// Request for one symbol's full history at a sampling frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub frequency: Frequency,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol, frequency: Frequency) -> Self {
        Self { symbol, frequency }
    }
}

/// Raw date-keyed history exactly as the upstream returned it, before any
/// filtering or extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub symbol: Symbol,
    pub frequency: Frequency,
    pub records: BTreeMap<String, PriceRecord>,
}

impl HistorySnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure, non-2xx status, or a body that does not parse.
    FetchFailure,
    /// The upstream answered, but with an API-level error or rate-limit
    /// note instead of data.
    Upstream,
    /// The response parsed but no time-series object could be located.
    MissingSeries,
    /// The request was rejected before any call was made.
    InvalidRequest,
}

/// Structured error returned by quote-source adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn fetch_failure(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::FetchFailure,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Upstream,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn missing_series(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::MissingSeries,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::FetchFailure => "source.fetch_failure",
            SourceErrorKind::Upstream => "source.upstream",
            SourceErrorKind::MissingSeries => "source.missing_series",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Upstream history contract.
///
/// Implementations must be `Send + Sync`; the CLI shares one instance per
/// invocation and tests substitute stub transports underneath.
pub trait QuoteSource: Send + Sync {
    /// Stable identifier carried into envelope metadata.
    fn id(&self) -> &'static str;

    /// Fetch the full history for one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the transport fails, the upstream
    /// answers with an error marker, or the response carries no series.
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HistorySnapshot, SourceError>> + Send + 'a>>;
}
