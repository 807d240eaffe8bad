use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

/// Strict exchange date format. Padded components only, so `2024-1-1`
/// does not parse.
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date keyed to the `YYYY-MM-DD` exchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(Date);

impl TradeDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat {
                value: input.to_owned(),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("TradeDate must be formattable as YYYY-MM-DD")
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Inclusive trading-date window.
///
/// `start > end` is a legal range that matches nothing; callers that want
/// to treat it as a mistake can check [`DateRange::is_empty`] up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: TradeDate,
    pub end: TradeDate,
}

impl DateRange {
    pub const fn new(start: TradeDate, end: TradeDate) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(TradeDate::parse(start)?, TradeDate::parse(end)?))
    }

    /// Both bounds included.
    pub fn contains(&self, date: TradeDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strict_iso_date() {
        let parsed = TradeDate::parse("2024-03-07").expect("must parse");
        assert_eq!(parsed.format_iso(), "2024-03-07");
    }

    #[test]
    fn rejects_unpadded_date() {
        let err = TradeDate::parse("2024-3-7").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDateFormat { .. }));
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let err = TradeDate::parse("2024-02-30").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDateFormat { .. }));
    }

    #[test]
    fn rejects_non_date_text() {
        let err = TradeDate::parse("last tuesday").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDateFormat { .. }));
    }

    #[test]
    fn orders_chronologically() {
        let early = TradeDate::parse("2024-01-02").expect("must parse");
        let late = TradeDate::parse("2024-01-10").expect("must parse");
        assert!(early < late);
    }

    #[test]
    fn range_contains_both_bounds() {
        let range = DateRange::parse("2024-01-02", "2024-01-10").expect("must parse");
        assert!(range.contains(TradeDate::parse("2024-01-02").expect("must parse")));
        assert!(range.contains(TradeDate::parse("2024-01-10").expect("must parse")));
        assert!(!range.contains(TradeDate::parse("2024-01-11").expect("must parse")));
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = DateRange::parse("2024-01-10", "2024-01-02").expect("must parse");
        assert!(range.is_empty());
        assert!(!range.contains(TradeDate::parse("2024-01-05").expect("must parse")));
    }

    #[test]
    fn serializes_as_iso_string() {
        let date = TradeDate::parse("2024-12-31").expect("must parse");
        let json = serde_json::to_string(&date).expect("must serialize");
        assert_eq!(json, "\"2024-12-31\"");
    }
}
