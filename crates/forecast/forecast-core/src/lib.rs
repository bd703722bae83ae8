//! Forecast Core
//!
//! Core implementations for step inference, future index generation,
//! forecasting strategies, assembly of history and forecast, cleaning of raw
//! rows, table ingestion and forecast export.

pub mod assembler;
pub mod clean;
pub mod engine;
pub mod export;
pub mod future_index;
pub mod step;
pub mod strategy;
pub mod table;

// Re-export SPI types for implementations
pub use forecast_spi::{
    AssembledRecord, AssembledSeries, ForecastError, ForecastMethod, ForecastResult, Forecaster,
    Phase, Result, StepEstimate, StepSource, TimeSeries,
};

// Re-export main types
pub use assembler::assemble;
pub use clean::{clean, clean_with_summary, CleaningSummary, Observation};
pub use engine::ForecastEngine;
pub use export::{export_file_name, forecast_to_csv, write_forecast_csv};
pub use future_index::future_index;
pub use step::infer_step;
pub use strategy::{LinearTrend, NaiveLastValue, RollingMean, Strategy, TrendLine};
pub use table::{parse_timestamp, parse_value, read_observations, TableReader};
