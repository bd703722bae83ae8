//! Forecast Facade
//!
//! High-level API for short-horizon forecasting. Re-exports all public types
//! from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{assembler, clean, engine, export, future_index, step, strategy, table};

// Constants used by exported tables and the rolling mean
pub use forecast_core::export::{PREDICTION_COLUMN, TIMESTAMP_COLUMN};
pub use forecast_core::strategy::MIN_WINDOW;
