//! Forecast Service Provider Interface
//!
//! Defines the cleaned time series model, forecast results, the error
//! taxonomy and the [`Forecaster`] contract every strategy implements.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Forecaster;
pub use error::{ForecastError, Result};
pub use model::{
    AssembledRecord, AssembledSeries, ForecastMethod, ForecastResult, Phase, StepEstimate,
    StepSource, TimeSeries,
};
