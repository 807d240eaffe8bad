use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};
use crate::quote_source::{HistoryRequest, HistorySnapshot, QuoteSource, SourceError};
use crate::{Frequency, PriceRecord};

/// Environment variable consulted for the API key when none is given
/// explicitly. Falls back to the public `demo` key, which the upstream
/// only honours for its showcase symbols.
pub const API_KEY_ENV: &str = "SIGMATICK_ALPHAVANTAGE_API_KEY";

const QUERY_ENDPOINT: &str = "https://www.alphavantage.co/query";
const DEMO_API_KEY: &str = "demo";

/// Key under which a response body nests its time-series object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesKey(String);

impl SeriesKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Locate the time-series object in a response body.
///
/// The exact key for the requested frequency wins when present; otherwise
/// any key carrying the upstream's `Time Series` marker is accepted, since
/// the labels have shifted between API revisions.
pub fn find_series_key(fields: &Map<String, Value>, frequency: Frequency) -> Option<SeriesKey> {
    let label = frequency.series_label();
    if fields.contains_key(label) {
        return Some(SeriesKey(String::from(label)));
    }

    fields
        .keys()
        .find(|key| key.contains("Time Series"))
        .cloned()
        .map(SeriesKey)
}

/// Alpha Vantage history adapter: one GET per request, no retries.
///
/// Everything rides on the query string, the API key included, so the
/// transport stays a plain URL-in, body-out call.
#[derive(Clone)]
pub struct AlphaVantageSource {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    timeout_ms: u64,
}

impl Default for AlphaVantageSource {
    fn default() -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::new()),
            api_key: std::env::var(API_KEY_ENV).unwrap_or_else(|_| String::from(DEMO_API_KEY)),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AlphaVantageSource {
    /// Adapter with an explicit key over the production transport.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Adapter with an injected transport, for tests and custom stacks.
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn endpoint(&self, req: &HistoryRequest) -> String {
        let mut url = format!(
            "{QUERY_ENDPOINT}?function={}&symbol={}",
            req.frequency.function_key(),
            urlencoding::encode(req.symbol.as_str()),
        );
        if req.frequency.wants_full_output() {
            url.push_str("&outputsize=full");
        }
        url.push_str("&apikey=");
        url.push_str(&urlencoding::encode(&self.api_key));
        url
    }

    fn decode_history(
        body: &str,
        frequency: Frequency,
    ) -> Result<BTreeMap<String, PriceRecord>, SourceError> {
        let root: Value = serde_json::from_str(body).map_err(|error| {
            SourceError::fetch_failure(format!("malformed upstream body: {error}"))
        })?;
        let Value::Object(fields) = root else {
            return Err(SourceError::fetch_failure("upstream body is not a JSON object"));
        };

        if let Some(marker) = upstream_marker(&fields) {
            return Err(SourceError::upstream(marker));
        }

        let Some(key) = find_series_key(&fields, frequency) else {
            return Err(SourceError::missing_series(
                "no time-series object in upstream response",
            ));
        };

        let series = fields.get(key.as_str()).cloned().unwrap_or(Value::Null);
        serde_json::from_value(series).map_err(|error| {
            SourceError::fetch_failure(format!("unreadable time-series object: {error}"))
        })
    }
}

/// API-level failure markers. An `Error Message` means a bad symbol, key
/// or function; a `Note` means the free-tier rate cap. Either way the body
/// carries no data.
fn upstream_marker(fields: &Map<String, Value>) -> Option<String> {
    for marker in ["Error Message", "Note"] {
        if let Some(value) = fields.get(marker) {
            return Some(match value.as_str() {
                Some(text) => format!("{marker}: {text}"),
                None => String::from(marker),
            });
        }
    }
    None
}

impl QuoteSource for AlphaVantageSource {
    fn id(&self) -> &'static str {
        "alphavantage"
    }

    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HistorySnapshot, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let request = HttpRequest::get(self.endpoint(&req)).with_timeout_ms(self.timeout_ms);

            let response = self.http_client.execute(request).await.map_err(|error| {
                SourceError::fetch_failure(format!(
                    "alphavantage transport error: {}",
                    error.message()
                ))
            })?;

            if !response.is_success() {
                return Err(SourceError::fetch_failure(format!(
                    "alphavantage upstream returned status {}",
                    response.status
                )));
            }

            let records = Self::decode_history(&response.body, req.frequency)?;
            Ok(HistorySnapshot {
                symbol: req.symbol,
                frequency: req.frequency,
                records,
            })
        })
    }
}
