//! Descriptive statistics over an extracted price series.

use serde::{Deserialize, Serialize};

use crate::{PriceSeries, ValidationError};

/// Mean and population standard deviation of a series.
///
/// Population, not sample: the window under scan is treated as the whole
/// population, so the variance divides by `n` rather than `n - 1`. A
/// constant series has `std_dev == 0.0`, which is a legal value here and
/// handled downstream when z-scores are taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl SeriesStats {
    /// Compute stats over raw values. Empty input is the one rejected case.
    pub fn from_values(values: &[f64]) -> Result<Self, ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::EmptySeries);
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    pub fn from_series(series: &PriceSeries) -> Result<Self, ValidationError> {
        let values: Vec<f64> = series.values().collect();
        Self::from_values(&values)
    }

    /// Signed z-score of `value`, or `None` when the deviation is undefined
    /// because the series never moves.
    pub fn z_score(&self, value: f64) -> Option<f64> {
        if self.std_dev == 0.0 {
            None
        } else {
            Some((value - self.mean) / self.std_dev)
        }
    }
}
