//! Forecast Consumer API
//!
//! Request-level entry points on top of the core engine.
//!
//! This crate provides:
//! - [`ForecastConfig`] with range validation and JSON loading
//! - [`ForecastReport`], the bundle a presentation layer renders
//! - Runners for an in-memory series, a delimited table, or a batch of
//!   configurations evaluated in parallel

pub mod config;
pub mod report;

use std::io::Read;

use rayon::prelude::*;
use tracing::{info, warn};

pub use config::{
    ForecastConfig, ForecastConfigBuilder, DEFAULT_HORIZON, DEFAULT_WINDOW, HORIZON_MAX,
    HORIZON_MIN, WINDOW_MAX, WINDOW_MIN,
};
pub use report::ForecastReport;

// Re-export from core
pub use forecast_core::{
    assemble, clean, clean_with_summary, export_file_name, forecast_to_csv, future_index,
    infer_step, parse_timestamp, parse_value, read_observations, write_forecast_csv,
    CleaningSummary, ForecastEngine, LinearTrend, NaiveLastValue, Observation, RollingMean,
    Strategy, TableReader, TrendLine,
};

// Re-export from SPI
pub use forecast_spi::{
    AssembledRecord, AssembledSeries, ForecastError, ForecastMethod, ForecastResult, Forecaster,
    Phase, Result, StepEstimate, StepSource, TimeSeries,
};

/// Forecast `series` with `config` and assemble it with its history.
pub fn run(target: &str, series: &TimeSeries, config: &ForecastConfig) -> Result<ForecastReport> {
    config.validate()?;

    let engine = ForecastEngine::for_method(config.method, config.window_size())?;
    let (result, step) = engine.forecast_with_step(series, config.horizon_steps())?;
    let assembled = assemble(series, &result)?;

    info!(
        column = target,
        method = %config.method,
        horizon = result.horizon(),
        history = series.len(),
        step_source = %step.source(),
        "forecast complete"
    );

    Ok(ForecastReport {
        target: target.to_string(),
        config: *config,
        step,
        result,
        assembled,
    })
}

/// Read a comma-separated table, clean the `target` column and forecast it.
///
/// The configuration is validated before the table is read.
pub fn run_table<R: Read>(
    reader: R,
    target: &str,
    config: &ForecastConfig,
) -> Result<ForecastReport> {
    run_table_with(&TableReader::new(), reader, target, config)
}

/// Like [`run_table`] with a custom [`TableReader`].
pub fn run_table_with<R: Read>(
    table: &TableReader,
    reader: R,
    target: &str,
    config: &ForecastConfig,
) -> Result<ForecastReport> {
    config.validate()?;

    let observations = table.read(reader, target)?;
    let (series, summary) = clean_with_summary(observations)?;
    if summary.missing_dropped > 0 || summary.duplicates_dropped > 0 {
        warn!(
            column = target,
            missing = summary.missing_dropped,
            duplicates = summary.duplicates_dropped,
            "dropped rows while cleaning"
        );
    }

    run(target, &series, config)
}

/// Run several configurations against the same series in parallel.
///
/// Results are returned in the order of `configs`; one failing
/// configuration does not affect the others.
pub fn run_batch(
    target: &str,
    series: &TimeSeries,
    configs: &[ForecastConfig],
) -> Vec<Result<ForecastReport>> {
    configs
        .par_iter()
        .map(|config| run(target, series, config))
        .collect()
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ForecastConfig, ForecastConfigBuilder};
    pub use crate::report::ForecastReport;
    pub use crate::{run, run_batch, run_table};
    pub use forecast_spi::{
        AssembledSeries, ForecastError, ForecastMethod, ForecastResult, Phase, Result,
        TimeSeries,
    };
}
