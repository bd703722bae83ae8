//! Forecast result model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::model::ForecastMethod;

/// Future timestamps paired with the values a strategy produced for them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    future_timestamps: Vec<NaiveDateTime>,
    future_values: Vec<f64>,
    method: ForecastMethod,
}

impl ForecastResult {
    /// Create a result; timestamps and values must align and timestamps
    /// must be strictly increasing.
    pub fn new(
        future_timestamps: Vec<NaiveDateTime>,
        future_values: Vec<f64>,
        method: ForecastMethod,
    ) -> Result<Self> {
        if future_timestamps.len() != future_values.len() {
            return Err(ForecastError::InvalidSeries(format!(
                "forecast has {} timestamps but {} values",
                future_timestamps.len(),
                future_values.len()
            )));
        }
        if future_timestamps.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ForecastError::InvalidSeries(
                "forecast timestamps must be strictly increasing".to_string(),
            ));
        }

        Ok(Self {
            future_timestamps,
            future_values,
            method,
        })
    }

    /// Number of forecast points
    pub fn horizon(&self) -> usize {
        self.future_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.future_values.is_empty()
    }

    pub fn future_timestamps(&self) -> &[NaiveDateTime] {
        &self.future_timestamps
    }

    pub fn future_values(&self) -> &[f64] {
        &self.future_values
    }

    pub fn method(&self) -> ForecastMethod {
        self.method
    }

    /// First forecast timestamp, if any
    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.future_timestamps.first().copied()
    }

    /// Iterate over `(timestamp, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.future_timestamps
            .iter()
            .copied()
            .zip(self.future_values.iter().copied())
    }
}

impl<'de> Deserialize<'de> for ForecastResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            future_timestamps: Vec<NaiveDateTime>,
            future_values: Vec<f64>,
            method: ForecastMethod,
        }

        let raw = Raw::deserialize(deserializer)?;
        ForecastResult::new(raw.future_timestamps, raw.future_values, raw.method)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_result() {
        let result = ForecastResult::new(
            vec![day(1), day(2)],
            vec![5.0, 6.0],
            ForecastMethod::LinearTrend,
        )
        .unwrap();

        assert_eq!(result.horizon(), 2);
        assert_eq!(result.method(), ForecastMethod::LinearTrend);
        assert_eq!(result.first_timestamp(), Some(day(1)));
        assert_eq!(result.iter().collect::<Vec<_>>(), vec![(day(1), 5.0), (day(2), 6.0)]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = ForecastResult::new(vec![day(1)], vec![1.0, 2.0], ForecastMethod::NaiveLastValue)
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));
    }

    #[test]
    fn test_unordered_timestamps_rejected() {
        let err = ForecastResult::new(
            vec![day(2), day(2)],
            vec![1.0, 2.0],
            ForecastMethod::RollingMean,
        )
        .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));
    }

    #[test]
    fn test_serializes_method_tag() {
        let result =
            ForecastResult::new(vec![day(4)], vec![7.0], ForecastMethod::RollingMean).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["method"], "rolling_mean");
        assert_eq!(json["future_values"][0], 7.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let result =
            ForecastResult::new(vec![day(4), day(5)], vec![7.0, 8.0], ForecastMethod::LinearTrend)
                .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: ForecastResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);

        let mismatched = r#"{"future_timestamps":["2024-03-04T00:00:00"],"future_values":[1.0,2.0],"method":"naive_last_value"}"#;
        assert!(serde_json::from_str::<ForecastResult>(mismatched).is_err());

        let unordered = r#"{"future_timestamps":["2024-03-05T00:00:00","2024-03-04T00:00:00"],"future_values":[1.0,2.0],"method":"naive_last_value"}"#;
        assert!(serde_json::from_str::<ForecastResult>(unordered).is_err());
    }
}
