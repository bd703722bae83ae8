//! Forecasting strategies
//!
//! The set of strategies is closed: [`Strategy`] carries one variant per
//! [`ForecastMethod`] and dispatches with a plain `match`.

mod linear_trend;
mod naive;
mod rolling_mean;

pub use linear_trend::{LinearTrend, TrendLine};
pub use naive::NaiveLastValue;
pub use rolling_mean::{RollingMean, MIN_WINDOW};

use forecast_spi::{ForecastMethod, Forecaster, Result, TimeSeries};

/// One of the supported forecasting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    LinearTrend(LinearTrend),
    NaiveLastValue(NaiveLastValue),
    RollingMean(RollingMean),
}

impl Strategy {
    /// Build the strategy for `method`. `window` is only read for
    /// [`ForecastMethod::RollingMean`].
    pub fn from_method(method: ForecastMethod, window: usize) -> Result<Self> {
        Ok(match method {
            ForecastMethod::LinearTrend => Strategy::LinearTrend(LinearTrend::new()),
            ForecastMethod::NaiveLastValue => Strategy::NaiveLastValue(NaiveLastValue::new()),
            ForecastMethod::RollingMean => Strategy::RollingMean(RollingMean::new(window)?),
        })
    }

    fn as_forecaster(&self) -> &dyn Forecaster {
        match self {
            Strategy::LinearTrend(s) => s,
            Strategy::NaiveLastValue(s) => s,
            Strategy::RollingMean(s) => s,
        }
    }
}

impl Forecaster for Strategy {
    fn method(&self) -> ForecastMethod {
        self.as_forecaster().method()
    }

    fn min_points(&self) -> usize {
        self.as_forecaster().min_points()
    }

    fn forecast(&self, series: &TimeSeries, horizon: usize) -> Result<Vec<f64>> {
        self.as_forecaster().forecast(series, horizon)
    }
}

impl From<LinearTrend> for Strategy {
    fn from(s: LinearTrend) -> Self {
        Strategy::LinearTrend(s)
    }
}

impl From<NaiveLastValue> for Strategy {
    fn from(s: NaiveLastValue) -> Self {
        Strategy::NaiveLastValue(s)
    }
}

impl From<RollingMean> for Strategy {
    fn from(s: RollingMean) -> Self {
        Strategy::RollingMean(s)
    }
}
