//! Naive last-value strategy

use forecast_spi::{ForecastError, ForecastMethod, Forecaster, Result, TimeSeries};

/// Repeats the last observed value for every future step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaiveLastValue;

impl NaiveLastValue {
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for NaiveLastValue {
    fn method(&self) -> ForecastMethod {
        ForecastMethod::NaiveLastValue
    }

    fn min_points(&self) -> usize {
        1
    }

    fn forecast(&self, series: &TimeSeries, horizon: usize) -> Result<Vec<f64>> {
        let last = series.last_value().ok_or(ForecastError::InsufficientData {
            required: self.min_points(),
            actual: 0,
        })?;
        Ok(vec![last; horizon])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::series;

    #[test]
    fn test_repeats_last_value() {
        let forecast = NaiveLastValue
            .forecast(&series(&[10.0, 20.0, 30.0]), 3)
            .unwrap();
        assert_eq!(forecast, vec![30.0, 30.0, 30.0]);
    }

    #[test]
    fn test_single_point_succeeds() {
        let forecast = NaiveLastValue.forecast(&series(&[42.0]), 2).unwrap();
        assert_eq!(forecast, vec![42.0, 42.0]);
    }

    #[test]
    fn test_negative_values() {
        let forecast = NaiveLastValue.forecast(&series(&[1.0, -4.5]), 1).unwrap();
        assert_eq!(forecast, vec![-4.5]);
    }

    #[test]
    fn test_empty_series_insufficient() {
        let err = NaiveLastValue.forecast(&series(&[]), 1).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 1,
                actual: 0
            }
        );
    }
}
