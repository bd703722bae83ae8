//! Trait for forecasting strategies

use crate::error::{ForecastError, Result};
use crate::model::{ForecastMethod, TimeSeries};

/// A strategy that projects a cleaned series `horizon` steps ahead.
///
/// Implementations are pure: the same series and horizon always produce the
/// same values.
pub trait Forecaster: Send + Sync {
    /// Tag identifying this strategy
    fn method(&self) -> ForecastMethod;

    /// Minimum number of historical points the strategy needs
    fn min_points(&self) -> usize;

    /// Produce exactly `horizon` future values
    fn forecast(&self, series: &TimeSeries, horizon: usize) -> Result<Vec<f64>>;

    /// Fail with `InsufficientData` when the series is too short
    fn ensure_enough_data(&self, series: &TimeSeries) -> Result<()> {
        let required = self.min_points();
        if series.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: series.len(),
            });
        }
        Ok(())
    }
}
