//! Rolling mean strategy
//!
//! Projects the final value of a trailing moving average, each window summed
//! independently. The average uses a minimum period of one, so leading
//! positions with fewer than `window` observations still get a value.

use forecast_spi::{ForecastError, ForecastMethod, Forecaster, Result, TimeSeries};
use serde::{Deserialize, Serialize};

/// Smallest accepted window
pub const MIN_WINDOW: usize = 2;

/// Repeats the last trailing mean for every future step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingMean {
    window: usize,
}

impl RollingMean {
    /// Create a rolling mean strategy
    ///
    /// # Arguments
    ///
    /// * `window` - Number of trailing observations to average (must be >= 2)
    pub fn new(window: usize) -> Result<Self> {
        if window < MIN_WINDOW {
            return Err(ForecastError::invalid_configuration(
                "window",
                format!("must be at least {}, got {}", MIN_WINDOW, window),
            ));
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Trailing mean at every position, with a minimum period of one
    pub fn trailing_mean(data: &[f64], window: usize) -> Vec<f64> {
        let window = window.max(1);
        (0..data.len())
            .map(|i| window_mean(&data[(i + 1).saturating_sub(window)..=i]))
            .collect()
    }

    /// Mean of the last `window` observations, or fewer when the data is shorter
    pub fn last_mean(data: &[f64], window: usize) -> Option<f64> {
        if data.is_empty() {
            return None;
        }
        Some(window_mean(&data[data.len().saturating_sub(window.max(1))..]))
    }
}

// Sums only the given window, never a running total
fn window_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

impl Forecaster for RollingMean {
    fn method(&self) -> ForecastMethod {
        ForecastMethod::RollingMean
    }

    fn min_points(&self) -> usize {
        1
    }

    fn forecast(&self, series: &TimeSeries, horizon: usize) -> Result<Vec<f64>> {
        self.ensure_enough_data(series)?;
        let base = Self::last_mean(series.values(), self.window).ok_or(
            ForecastError::InsufficientData {
                required: self.min_points(),
                actual: 0,
            },
        )?;
        Ok(vec![base; horizon])
    }
}
