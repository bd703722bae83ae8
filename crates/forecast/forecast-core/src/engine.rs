//! Forecast engine
//!
//! Runs one forecast request end to end: horizon check, data check, step
//! inference, future index, strategy values. Every check happens before any
//! output is built, so a failing request never yields a partial result.

use forecast_spi::{
    ForecastError, ForecastMethod, ForecastResult, Forecaster, Result, StepEstimate, TimeSeries,
};
use tracing::debug;

use crate::future_index::future_index;
use crate::step::infer_step;
use crate::strategy::Strategy;

/// Produces a [`ForecastResult`] from a cleaned series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastEngine {
    strategy: Strategy,
}

impl ForecastEngine {
    pub fn new(strategy: impl Into<Strategy>) -> Self {
        Self {
            strategy: strategy.into(),
        }
    }

    /// Engine for `method`; `window` only matters for the rolling mean
    pub fn for_method(method: ForecastMethod, window: usize) -> Result<Self> {
        Ok(Self::new(Strategy::from_method(method, window)?))
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn method(&self) -> ForecastMethod {
        self.strategy.method()
    }

    /// Forecast `horizon` steps past the end of `series`
    pub fn forecast(&self, series: &TimeSeries, horizon: usize) -> Result<ForecastResult> {
        self.forecast_with_step(series, horizon).map(|(result, _)| result)
    }

    /// Like [`forecast`](Self::forecast), also returning the step the future
    /// index was built with
    pub fn forecast_with_step(
        &self,
        series: &TimeSeries,
        horizon: usize,
    ) -> Result<(ForecastResult, StepEstimate)> {
        if horizon == 0 {
            return Err(ForecastError::invalid_horizon(0, "must be a positive integer"));
        }
        self.strategy.ensure_enough_data(series)?;

        let last = series
            .last_timestamp()
            .ok_or(ForecastError::InsufficientData {
                required: 1,
                actual: 0,
            })?;

        let step = infer_step(series.timestamps());
        let timestamps = future_index(last, step.interval(), horizon)?;
        let values = self.strategy.forecast(series, horizon)?;

        if values.len() != horizon {
            return Err(ForecastError::NumericalError(format!(
                "{} produced {} values for horizon {}",
                self.method(),
                values.len(),
                horizon
            )));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::NumericalError(format!(
                "{} produced a non-finite value at step {}",
                self.method(),
                i + 1
            )));
        }

        debug!(
            method = %self.method(),
            history = series.len(),
            horizon,
            step_secs = step.interval_seconds(),
            step_source = %step.source(),
            "forecast computed"
        );

        let result = ForecastResult::new(timestamps, values, self.method())?;
        Ok((result, step))
    }

    /// Step that [`forecast`](Self::forecast) would use for `series`
    pub fn step_for(&self, series: &TimeSeries) -> StepEstimate {
        infer_step(series.timestamps())
    }
}
