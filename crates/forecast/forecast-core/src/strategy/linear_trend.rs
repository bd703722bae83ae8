//! Linear trend over positional indices
//!
//! Fits `value = slope * index + intercept` by ordinary least squares, where
//! `index` is the zero-based position of each observation rather than its
//! timestamp. Irregular spacing therefore does not bend the line.

use forecast_spi::{ForecastError, ForecastMethod, Forecaster, Result, TimeSeries};
use serde::{Deserialize, Serialize};

/// Fitted line `value = slope * index + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Fit a line to `values` indexed 0, 1, 2, ...
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: values.len(),
            });
        }

        let n = values.len() as f64;
        let mean_t = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        let (sxx, sxy) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sxx, sxy), (i, &y)| {
                let dt = i as f64 - mean_t;
                (sxx + dt * dt, sxy + dt * (y - mean_y))
            });

        if sxx.abs() < 1e-12 {
            return Err(ForecastError::NumericalError(
                "Singular design in trend regression".to_string(),
            ));
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_t,
        })
    }

    /// Evaluate the line at a positional index
    pub fn at(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }
}

/// Linear trend strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearTrend;

impl LinearTrend {
    pub fn new() -> Self {
        Self
    }

    /// Fit the trend line for a series
    pub fn fit(&self, series: &TimeSeries) -> Result<TrendLine> {
        self.ensure_enough_data(series)?;
        TrendLine::fit(series.values())
    }
}

impl Forecaster for LinearTrend {
    fn method(&self) -> ForecastMethod {
        ForecastMethod::LinearTrend
    }

    fn min_points(&self) -> usize {
        2
    }

    fn forecast(&self, series: &TimeSeries, horizon: usize) -> Result<Vec<f64>> {
        let line = self.fit(series)?;
        let n = series.len();
        Ok((n..n + horizon).map(|i| line.at(i as f64)).collect())
    }
}
