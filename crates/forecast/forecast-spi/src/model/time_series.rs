//! Cleaned time series model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// An ordered, deduplicated sequence of `(timestamp, value)` pairs.
///
/// Timestamps are strictly increasing and every value is finite. Rows with a
/// missing timestamp or value never reach this type; they are dropped by the
/// cleaning step beforehand.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TimeSeries {
    timestamps: Vec<NaiveDateTime>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series, validating its invariants
    pub fn new(timestamps: Vec<NaiveDateTime>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::InvalidSeries(format!(
                "{} timestamps but {} values",
                timestamps.len(),
                values.len()
            )));
        }

        if let Some(i) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ForecastError::InvalidSeries(format!(
                "timestamps must be strictly increasing: {} is followed by {}",
                timestamps[i],
                timestamps[i + 1]
            )));
        }

        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidSeries(format!(
                "value at position {} is not finite",
                i
            )));
        }

        Ok(Self { timestamps, values })
    }

    /// Build a series from `(timestamp, value)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDateTime, f64)>,
    {
        let (timestamps, values) = pairs.into_iter().unzip();
        Self::new(timestamps, values)
    }

    /// Returns the number of data points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no data points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the last timestamp, or None if empty.
    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamps.last().copied()
    }

    /// Returns the last value, or None if empty.
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Iterate over `(timestamp, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            timestamps: Vec<NaiveDateTime>,
            values: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimeSeries::new(raw.timestamps, raw.values).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_valid_series() {
        let series = TimeSeries::new(vec![day(1), day(2), day(3)], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.last_timestamp(), Some(day(3)));
        assert_eq!(series.last_value(), Some(3.0));
    }

    #[test]
    fn test_empty_series_is_allowed() {
        let series = TimeSeries::new(vec![], vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.last_timestamp(), None);
        assert_eq!(series.last_value(), None);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = TimeSeries::new(vec![day(1), day(2)], vec![1.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));
    }

    #[test]
    fn test_duplicate_timestamp_rejected() {
        let err = TimeSeries::new(vec![day(1), day(1)], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));
    }

    #[test]
    fn test_descending_timestamps_rejected() {
        let err = TimeSeries::new(vec![day(2), day(1)], vec![1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = TimeSeries::new(vec![day(1), day(2)], vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InvalidSeries("value at position 1 is not finite".to_string())
        );
    }

    #[test]
    fn test_from_pairs_and_iter() {
        let series = TimeSeries::from_pairs(vec![(day(1), 10.0), (day(5), 20.0)]).unwrap();
        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs, vec![(day(1), 10.0), (day(5), 20.0)]);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"timestamps":["2024-01-01T00:00:00","2024-01-02T00:00:00"],"values":[1.0,2.0]}"#;
        let series: TimeSeries = serde_json::from_str(ok).unwrap();
        assert_eq!(series.len(), 2);

        let bad = r#"{"timestamps":["2024-01-02T00:00:00","2024-01-01T00:00:00"],"values":[1.0,2.0]}"#;
        assert!(serde_json::from_str::<TimeSeries>(bad).is_err());
    }
}
