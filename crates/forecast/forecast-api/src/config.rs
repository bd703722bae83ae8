//! Forecast request configuration.

use forecast_spi::{ForecastError, ForecastMethod, Result};
use serde::{Deserialize, Serialize};

/// Smallest accepted horizon
pub const HORIZON_MIN: i64 = 1;
/// Largest accepted horizon
pub const HORIZON_MAX: i64 = 365;
/// Smallest accepted rolling window
pub const WINDOW_MIN: i64 = 2;
/// Largest accepted rolling window
pub const WINDOW_MAX: i64 = 60;

pub const DEFAULT_HORIZON: i64 = 12;
pub const DEFAULT_WINDOW: i64 = 7;

/// Configuration for a single forecast request.
///
/// Values arrive from an outer interface and may be out of range; call
/// [`validate`](Self::validate) (the runners do) before using them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Forecasting strategy
    pub method: ForecastMethod,
    /// Number of future steps, 1 to 365
    pub horizon: i64,
    /// Trailing window, 2 to 60; only read by the rolling mean
    pub window: i64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            method: ForecastMethod::LinearTrend,
            horizon: DEFAULT_HORIZON,
            window: DEFAULT_WINDOW,
        }
    }
}

impl ForecastConfig {
    /// Create a new configuration.
    pub fn new(method: ForecastMethod, horizon: i64, window: i64) -> Self {
        Self {
            method,
            horizon,
            window,
        }
    }

    /// Linear trend over `horizon` steps.
    pub fn linear_trend(horizon: i64) -> Self {
        Self::new(ForecastMethod::LinearTrend, horizon, DEFAULT_WINDOW)
    }

    /// Naive last value over `horizon` steps.
    pub fn naive(horizon: i64) -> Self {
        Self::new(ForecastMethod::NaiveLastValue, horizon, DEFAULT_WINDOW)
    }

    /// Rolling mean of `window` observations over `horizon` steps.
    pub fn rolling_mean(horizon: i64, window: i64) -> Self {
        Self::new(ForecastMethod::RollingMean, horizon, window)
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults; unknown fields and unknown method
    /// tags are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ForecastError::invalid_configuration("config", e.to_string()))?;

        if let Some(horizon) = value.get("horizon") {
            if horizon.as_i64().is_none() {
                return Err(ForecastError::invalid_horizon(
                    horizon.as_f64().map_or(0, |h| h as i64),
                    format!("must be an integer, got {}", horizon),
                ));
            }
        }

        let config: Self = serde_json::from_value(value)
            .map_err(|e| ForecastError::invalid_configuration("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration against the accepted bounds.
    pub fn validate(&self) -> Result<()> {
        if self.horizon < HORIZON_MIN {
            return Err(ForecastError::invalid_horizon(
                self.horizon,
                "must be a positive integer",
            ));
        }
        if self.horizon > HORIZON_MAX {
            return Err(ForecastError::invalid_horizon(
                self.horizon,
                format!("must be at most {}", HORIZON_MAX),
            ));
        }
        if self.method.uses_window() && !(WINDOW_MIN..=WINDOW_MAX).contains(&self.window) {
            return Err(ForecastError::invalid_configuration(
                "window",
                format!(
                    "must be between {} and {}, got {}",
                    WINDOW_MIN, WINDOW_MAX, self.window
                ),
            ));
        }
        Ok(())
    }

    /// Horizon as a step count; zero when negative.
    pub fn horizon_steps(&self) -> usize {
        usize::try_from(self.horizon).unwrap_or(0)
    }

    /// Window as an observation count; zero when negative.
    pub fn window_size(&self) -> usize {
        usize::try_from(self.window).unwrap_or(0)
    }
}

/// Builder for ForecastConfig.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    method: Option<ForecastMethod>,
    method_tag: Option<String>,
    horizon: Option<i64>,
    window: Option<i64>,
}

impl ForecastConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the method.
    pub fn method(mut self, method: ForecastMethod) -> Self {
        self.method = Some(method);
        self.method_tag = None;
        self
    }

    /// Set the method from a textual tag, parsed on build.
    pub fn method_tag(mut self, tag: &str) -> Self {
        self.method_tag = Some(tag.to_string());
        self.method = None;
        self
    }

    /// Set the horizon.
    pub fn horizon(mut self, horizon: i64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Set the rolling window.
    pub fn window(mut self, window: i64) -> Self {
        self.window = Some(window);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        let defaults = ForecastConfig::default();
        let method = match (self.method, self.method_tag) {
            (Some(method), _) => method,
            (None, Some(tag)) => tag.parse()?,
            (None, None) => defaults.method,
        };

        let config = ForecastConfig {
            method,
            horizon: self.horizon.unwrap_or(defaults.horizon),
            window: self.window.unwrap_or(defaults.window),
        };
        config.validate()?;
        Ok(config)
    }
}
