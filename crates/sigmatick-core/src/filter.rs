//! Inclusive date-range restriction of raw quote histories.

use std::collections::BTreeMap;

use crate::{DateRange, PriceRecord, TradeDate, ValidationError};

/// Keep the records whose date falls inside `range`, both bounds included.
///
/// Every key is parsed, in-range or not: one malformed date key fails the
/// whole call rather than silently narrowing the window. An inverted range
/// is not an error and simply selects nothing.
pub fn filter_range(
    records: BTreeMap<String, PriceRecord>,
    range: &DateRange,
) -> Result<BTreeMap<TradeDate, PriceRecord>, ValidationError> {
    let mut selected = BTreeMap::new();
    for (raw_date, record) in records {
        let date = TradeDate::parse(&raw_date)?;
        if range.contains(date) {
            selected.insert(date, record);
        }
    }
    Ok(selected)
}
