//! Forecast table export as delimited text

use std::io::Write;

use chrono::{NaiveDateTime, Timelike};
use forecast_spi::{ForecastError, ForecastResult, Result};

/// Header of the timestamp column in exported tables
pub const TIMESTAMP_COLUMN: &str = "timestamp";
/// Header of the predicted value column in exported tables
pub const PREDICTION_COLUMN: &str = "prediction";

/// File name for the exported forecast of `target`
pub fn export_file_name(target: &str) -> String {
    let safe: String = target
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("forecast_{}.csv", safe)
}

/// Write `timestamp,prediction` rows for every forecast point
pub fn write_forecast_csv<W: Write>(result: &ForecastResult, writer: W) -> Result<()> {
    let layout = TimestampLayout::for_timestamps(result.future_timestamps());
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([TIMESTAMP_COLUMN, PREDICTION_COLUMN])
        .map_err(|e| ForecastError::Export(e.to_string()))?;

    for (timestamp, value) in result.iter() {
        csv.write_record([layout.format(timestamp), value.to_string()])
            .map_err(|e| ForecastError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| ForecastError::Export(e.to_string()))
}

/// Forecast table as an in-memory CSV string
pub fn forecast_to_csv(result: &ForecastResult) -> Result<String> {
    let mut buf = Vec::new();
    write_forecast_csv(result, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ForecastError::Export(e.to_string()))
}

/// Coarsest layout that prints every forecast timestamp without loss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimestampLayout {
    Date,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl TimestampLayout {
    fn for_timestamps(timestamps: &[NaiveDateTime]) -> Self {
        let nanos = || timestamps.iter().map(|t| t.nanosecond() % 1_000_000_000);
        if nanos().any(|n| n % 1_000 != 0) {
            TimestampLayout::Nanos
        } else if nanos().any(|n| n % 1_000_000 != 0) {
            TimestampLayout::Micros
        } else if nanos().any(|n| n != 0) {
            TimestampLayout::Millis
        } else if timestamps.iter().all(|t| t.num_seconds_from_midnight() == 0) {
            TimestampLayout::Date
        } else {
            TimestampLayout::Seconds
        }
    }

    fn format(self, timestamp: NaiveDateTime) -> String {
        let fmt = match self {
            TimestampLayout::Date => "%Y-%m-%d",
            TimestampLayout::Seconds => "%Y-%m-%d %H:%M:%S",
            TimestampLayout::Millis => "%Y-%m-%d %H:%M:%S%.3f",
            TimestampLayout::Micros => "%Y-%m-%d %H:%M:%S%.6f",
            TimestampLayout::Nanos => "%Y-%m-%d %H:%M:%S%.9f",
        };
        timestamp.format(fmt).to_string()
    }
}
