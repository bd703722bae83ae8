//! Forecasting method tag

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ForecastError;

/// Closed set of forecasting strategies.
///
/// Parsing is case-insensitive and accepts the canonical snake_case tag,
/// the variant name and a short alias. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ForecastMethod {
    /// Ordinary least squares line over positional indices
    LinearTrend,
    /// Repeat the last observed value
    NaiveLastValue,
    /// Repeat the final trailing mean
    RollingMean,
}

impl ForecastMethod {
    pub const ALL: [ForecastMethod; 3] = [
        ForecastMethod::LinearTrend,
        ForecastMethod::NaiveLastValue,
        ForecastMethod::RollingMean,
    ];

    /// Canonical tag, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::LinearTrend => "linear_trend",
            ForecastMethod::NaiveLastValue => "naive_last_value",
            ForecastMethod::RollingMean => "rolling_mean",
        }
    }

    /// Human readable label for chart titles and legends
    pub fn label(&self) -> &'static str {
        match self {
            ForecastMethod::LinearTrend => "Linear Trend",
            ForecastMethod::NaiveLastValue => "Naive (Last Value)",
            ForecastMethod::RollingMean => "Rolling Mean (Window)",
        }
    }

    /// Whether the method reads the rolling window setting
    pub fn uses_window(&self) -> bool {
        matches!(self, ForecastMethod::RollingMean)
    }
}

impl std::fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ForecastMethod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "linear_trend" | "lineartrend" | "linear" => Ok(ForecastMethod::LinearTrend),
            "naive_last_value" | "naivelastvalue" | "naive" | "last_value" => {
                Ok(ForecastMethod::NaiveLastValue)
            }
            "rolling_mean" | "rollingmean" | "rolling" | "moving_average" => {
                Ok(ForecastMethod::RollingMean)
            }
            _ => Err(ForecastError::invalid_configuration(
                "method",
                format!(
                    "unrecognized method '{}'; expected one of linear_trend, naive_last_value, rolling_mean",
                    s
                ),
            )),
        }
    }
}

impl TryFrom<String> for ForecastMethod {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
