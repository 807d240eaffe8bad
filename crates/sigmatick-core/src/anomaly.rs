//! Z-score threshold anomaly flagging.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{PriceSeries, SeriesStats, TradeDate, ValidationError};

/// Dates whose price deviates from the mean by more than the threshold.
///
/// Backed by an ordered map so listings come out in ascending date order
/// without a separate sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnomalySet(BTreeMap<TradeDate, f64>);

impl AnomalySet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, date: TradeDate) -> bool {
        self.0.contains_key(&date)
    }

    pub fn get(&self, date: TradeDate) -> Option<f64> {
        self.0.get(&date).copied()
    }

    /// Flagged entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (TradeDate, f64)> + '_ {
        self.0.iter().map(|(date, value)| (*date, *value))
    }
}

impl FromIterator<(TradeDate, f64)> for AnomalySet {
    fn from_iter<I: IntoIterator<Item = (TradeDate, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reject thresholds that cannot flag meaningfully: zero, negative, NaN
/// and infinities. Boundary validation for callers taking user input;
/// [`detect`] itself takes `k` as given.
pub fn validate_threshold(k: f64) -> Result<f64, ValidationError> {
    if k.is_finite() && k > 0.0 {
        Ok(k)
    } else {
        Err(ValidationError::InvalidThreshold { value: k })
    }
}

/// Flag every entry whose absolute deviation from the mean strictly
/// exceeds `k * std_dev`.
///
/// A point sitting exactly on the boundary is not flagged. A flat series
/// (`std_dev == 0`) makes the threshold zero, so any departure from the
/// mean is an anomaly.
pub fn detect(series: &PriceSeries, stats: &SeriesStats, k: f64) -> AnomalySet {
    let threshold = k * stats.std_dev;
    series
        .iter()
        .filter(|(_, value)| (value - stats.mean).abs() > threshold)
        .collect()
}
