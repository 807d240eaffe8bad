use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{PriceField, TradeDate};

/// Raw per-date field map, kept exactly as the upstream returned it.
///
/// Values stay as strings until a [`PriceField`] is extracted; a record is
/// allowed to be missing fields or to carry junk in them, and only the
/// extraction step decides what that means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceRecord(BTreeMap<String, String>);

impl PriceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, field: PriceField) -> Option<&str> {
        self.0.get(field.record_key()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for PriceRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One numeric field per trading date, ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(BTreeMap<TradeDate, f64>);

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: TradeDate, value: f64) {
        self.0.insert(date, value);
    }

    pub fn get(&self, date: TradeDate) -> Option<f64> {
        self.0.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (TradeDate, f64)> + '_ {
        self.0.iter().map(|(date, value)| (*date, *value))
    }

    pub fn dates(&self) -> impl Iterator<Item = TradeDate> + '_ {
        self.0.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }
}

impl FromIterator<(TradeDate, f64)> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = (TradeDate, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Why a date was left out of an extracted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingField,
    NonNumericValue,
}

/// A date dropped during extraction, with enough context for a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPoint {
    pub date: TradeDate,
    pub field: PriceField,
    pub reason: SkipReason,
}

impl Display for SkippedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            SkipReason::MissingField => {
                write!(f, "{}: missing field '{}'", self.date, self.field.record_key())
            }
            SkipReason::NonNumericValue => {
                write!(f, "{}: non-numeric value in '{}'", self.date, self.field.record_key())
            }
        }
    }
}

/// Outcome of pulling one field out of filtered records: the usable series
/// plus every date that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub series: PriceSeries,
    pub skipped: Vec<SkippedPoint>,
}

/// Extract `field` from each record, skipping dates where the field is
/// absent or does not parse as a finite number. Skips are per-date and
/// never abort the extraction.
pub fn extract_field(records: &BTreeMap<TradeDate, PriceRecord>, field: PriceField) -> Extraction {
    let mut extraction = Extraction::default();
    for (date, record) in records {
        let Some(raw) = record.field(field) else {
            extraction.skipped.push(SkippedPoint {
                date: *date,
                field,
                reason: SkipReason::MissingField,
            });
            continue;
        };

        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => extraction.series.insert(*date, value),
            _ => extraction.skipped.push(SkippedPoint {
                date: *date,
                field,
                reason: SkipReason::NonNumericValue,
            }),
        }
    }
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(close: &str) -> PriceRecord {
        PriceRecord::new()
            .with_field("1. open", "100.0")
            .with_field("4. close", close)
    }

    fn date(input: &str) -> TradeDate {
        TradeDate::parse(input).expect("must parse")
    }

    #[test]
    fn extracts_requested_field_in_date_order() {
        let mut records = BTreeMap::new();
        records.insert(date("2024-01-03"), record("103.5"));
        records.insert(date("2024-01-02"), record("101.0"));

        let extraction = extract_field(&records, PriceField::Close);

        assert!(extraction.skipped.is_empty());
        let entries: Vec<(TradeDate, f64)> = extraction.series.iter().collect();
        assert_eq!(
            entries,
            vec![(date("2024-01-02"), 101.0), (date("2024-01-03"), 103.5)]
        );
    }

    #[test]
    fn skips_dates_missing_the_field() {
        let mut records = BTreeMap::new();
        records.insert(date("2024-01-02"), record("101.0"));
        records.insert(
            date("2024-01-03"),
            PriceRecord::new().with_field("1. open", "100.0"),
        );

        let extraction = extract_field(&records, PriceField::Close);

        assert_eq!(extraction.series.len(), 1);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].date, date("2024-01-03"));
        assert_eq!(extraction.skipped[0].reason, SkipReason::MissingField);
    }

    #[test]
    fn skips_non_numeric_values() {
        let mut records = BTreeMap::new();
        records.insert(date("2024-01-02"), record("n/a"));
        records.insert(date("2024-01-03"), record("NaN"));

        let extraction = extract_field(&records, PriceField::Close);

        assert!(extraction.series.is_empty());
        assert_eq!(extraction.skipped.len(), 2);
        assert!(extraction
            .skipped
            .iter()
            .all(|point| point.reason == SkipReason::NonNumericValue));
    }

    #[test]
    fn skipped_point_renders_a_diagnostic() {
        let point = SkippedPoint {
            date: date("2024-01-03"),
            field: PriceField::Close,
            reason: SkipReason::MissingField,
        };
        assert_eq!(point.to_string(), "2024-01-03: missing field '4. close'");
    }
}
