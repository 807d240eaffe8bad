//! Scan report assembly and rendering.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{AnomalySet, DateRange, Frequency, PriceField, SeriesStats, Symbol, TradeDate};

const RULE_WIDTH: usize = 40;

/// Side of the mean a flagged price sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }
}

/// One flagged point as it appears in the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyLine {
    pub date: TradeDate,
    pub price: f64,
    /// `None` when the series is flat and the z-score is undefined.
    pub z_score: Option<f64>,
    pub direction: Direction,
}

/// Complete outcome of one anomaly scan.
///
/// Renders as a fixed-width text block via [`Display`] and serializes to
/// JSON as-is, so both CLI output modes read from the same value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub symbol: Symbol,
    pub frequency: Frequency,
    pub field: PriceField,
    pub range: DateRange,
    pub point_count: usize,
    pub stats: SeriesStats,
    pub threshold: f64,
    pub anomalies: Vec<AnomalyLine>,
}

impl ScanReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        frequency: Frequency,
        field: PriceField,
        range: DateRange,
        point_count: usize,
        stats: SeriesStats,
        threshold: f64,
        anomalies: &AnomalySet,
    ) -> Self {
        let anomalies = anomalies
            .iter()
            .map(|(date, price)| AnomalyLine {
                date,
                price,
                z_score: stats.z_score(price),
                direction: if price > stats.mean {
                    Direction::Up
                } else {
                    Direction::Down
                },
            })
            .collect();

        Self {
            symbol,
            frequency,
            field,
            range,
            point_count,
            stats,
            threshold,
            anomalies,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for ScanReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "  {:<11} : {}", "Symbol", self.symbol)?;
        writeln!(f, "  {:<11} : {}", "Frequency", self.frequency.function_key())?;
        writeln!(f, "  {:<11} : {}", "Price field", self.field.record_key())?;
        writeln!(f, "  {:<11} : {}", "Date range", self.range)?;
        writeln!(f, "  {:<11} : {}", "Data points", self.point_count)?;
        writeln!(f, "  {:<11} : {:.2}", "Mean", self.stats.mean)?;
        writeln!(f, "  {:<11} : {:.2}", "Std dev", self.stats.std_dev)?;
        writeln!(f, "  {:<11} : ±{} σ", "Threshold", self.threshold)?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;

        if self.anomalies.is_empty() {
            return write!(f, "No anomalies detected at the ±{} σ threshold.", self.threshold);
        }

        let noun = if self.anomalies.len() == 1 {
            "anomaly"
        } else {
            "anomalies"
        };
        writeln!(f, "{} {noun} detected:", self.anomalies.len())?;
        writeln!(f)?;

        for (index, line) in self.anomalies.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            match line.z_score {
                Some(z) => write!(
                    f,
                    "  {}  {}  {:.2}  (z = {:+.2})",
                    line.date,
                    line.direction.marker(),
                    line.price,
                    z
                )?,
                None => write!(
                    f,
                    "  {}  {}  {:.2}  (z = undefined)",
                    line.date,
                    line.direction.marker(),
                    line.price
                )?,
            }
        }

        Ok(())
    }
}
