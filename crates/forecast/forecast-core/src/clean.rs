//! Raw rows to a cleaned [`TimeSeries`]
//!
//! A cell is missing when it is `None`, or when a value is NaN or infinite.
//! Rows with a missing timestamp or value are dropped, the rest are sorted
//! by timestamp (stable) and only the first row of each timestamp is kept.

use chrono::NaiveDateTime;
use forecast_spi::{Result, TimeSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One raw row: a timestamp cell and a target value cell
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: Option<NaiveDateTime>,
    pub value: Option<f64>,
}

impl Observation {
    pub fn new(timestamp: Option<NaiveDateTime>, value: Option<f64>) -> Self {
        Self { timestamp, value }
    }

    /// Row with both cells present
    pub fn complete(timestamp: NaiveDateTime, value: f64) -> Self {
        Self::new(Some(timestamp), Some(value))
    }

    /// Both cells present and the value finite
    pub fn is_complete(&self) -> bool {
        self.timestamp.is_some() && self.value.map_or(false, f64::is_finite)
    }
}

/// What cleaning removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub input_rows: usize,
    pub missing_dropped: usize,
    pub duplicates_dropped: usize,
}

impl CleaningSummary {
    pub fn kept(&self) -> usize {
        self.input_rows - self.missing_dropped - self.duplicates_dropped
    }
}

/// Clean raw rows into a [`TimeSeries`]
pub fn clean<I>(rows: I) -> Result<TimeSeries>
where
    I: IntoIterator<Item = Observation>,
{
    clean_with_summary(rows).map(|(series, _)| series)
}

/// Clean raw rows, also reporting how many rows were dropped and why
pub fn clean_with_summary<I>(rows: I) -> Result<(TimeSeries, CleaningSummary)>
where
    I: IntoIterator<Item = Observation>,
{
    let mut summary = CleaningSummary::default();
    let mut pairs: Vec<(NaiveDateTime, f64)> = Vec::new();

    for row in rows {
        summary.input_rows += 1;
        match (row.timestamp, row.value) {
            (Some(t), Some(v)) if v.is_finite() => pairs.push((t, v)),
            _ => summary.missing_dropped += 1,
        }
    }

    pairs.sort_by_key(|&(t, _)| t);
    let before = pairs.len();
    pairs.dedup_by_key(|&mut (t, _)| t);
    summary.duplicates_dropped = before - pairs.len();

    debug!(
        input = summary.input_rows,
        missing = summary.missing_dropped,
        duplicates = summary.duplicates_dropped,
        kept = pairs.len(),
        "cleaned observations"
    );

    Ok((TimeSeries::from_pairs(pairs)?, summary))
}
