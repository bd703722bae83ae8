//! Forecast error taxonomy and the crate-wide result alias

mod forecast_error;

pub use forecast_error::ForecastError;

/// Result of any fallible forecast operation
pub type Result<T> = std::result::Result<T, ForecastError>;
