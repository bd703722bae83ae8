//! Output of a forecast request.

use std::io::Write;

use forecast_core::{export_file_name, forecast_to_csv, write_forecast_csv};
use forecast_spi::{AssembledSeries, ForecastResult, Result, StepEstimate};
use serde::Serialize;

use crate::config::ForecastConfig;

/// Everything a presentation layer needs to render one forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    /// Name of the forecast column
    pub target: String,
    /// Validated configuration the forecast ran with
    pub config: ForecastConfig,
    /// Spacing used for the future index
    pub step: StepEstimate,
    /// Future timestamps and values
    pub result: ForecastResult,
    /// History followed by forecast, tagged by phase
    pub assembled: AssembledSeries,
}

impl ForecastReport {
    /// Chart title, e.g. `Forecast sales – Linear Trend (+12)`
    pub fn title(&self) -> String {
        format!(
            "Forecast {} – {} (+{})",
            self.target,
            self.result.method().label(),
            self.result.horizon()
        )
    }

    /// File name for the exported forecast table
    pub fn file_name(&self) -> String {
        export_file_name(&self.target)
    }

    /// Forecast table as CSV text
    pub fn to_csv(&self) -> Result<String> {
        forecast_to_csv(&self.result)
    }

    /// Write the forecast table as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        write_forecast_csv(&self.result, writer)
    }
}
