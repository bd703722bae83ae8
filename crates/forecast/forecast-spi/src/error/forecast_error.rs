//! Forecast error types

use thiserror::Error;

/// Errors that can occur while preparing or producing a forecast
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the selected strategy
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Horizon is not a positive integer or exceeds the accepted bound
    #[error("Invalid horizon {horizon}: {reason}")]
    InvalidHorizon { horizon: i64, reason: String },

    /// Invalid configuration value (window, method tag, column, step)
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfiguration { name: String, reason: String },

    /// Dominant step collapsed to zero.
    ///
    /// Raised internally by step inference and always recovered there.
    #[error("Degenerate step: dominant interval between timestamps is zero")]
    DegenerateStep,

    /// Series or result violates its structural invariants
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// Date arithmetic left the representable calendar range
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Failed to read a delimited table
    #[error("Table error: {0}")]
    Table(String),

    /// Failed to write forecast output
    #[error("Export error: {0}")]
    Export(String),
}

impl ForecastError {
    /// Shorthand for [`ForecastError::InvalidConfiguration`]
    pub fn invalid_configuration(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`ForecastError::InvalidHorizon`]
    pub fn invalid_horizon(horizon: i64, reason: impl Into<String>) -> Self {
        Self::InvalidHorizon {
            horizon,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_invalid_horizon_error_message() {
        let error = ForecastError::invalid_horizon(0, "must be a positive integer");
        assert_eq!(
            error.to_string(),
            "Invalid horizon 0: must be a positive integer"
        );
    }

    #[test]
    fn test_invalid_horizon_fields() {
        let error = ForecastError::invalid_horizon(-3, "must be a positive integer");
        if let ForecastError::InvalidHorizon { horizon, reason } = error {
            assert_eq!(horizon, -3);
            assert_eq!(reason, "must be a positive integer");
        } else {
            panic!("Expected InvalidHorizon variant");
        }
    }

    #[test]
    fn test_invalid_configuration_error_message() {
        let error = ForecastError::invalid_configuration("window", "must be at least 2");
        assert_eq!(
            error.to_string(),
            "Invalid configuration 'window': must be at least 2"
        );
    }

    #[test]
    fn test_degenerate_step_message() {
        assert_eq!(
            ForecastError::DegenerateStep.to_string(),
            "Degenerate step: dominant interval between timestamps is zero"
        );
    }

    #[test]
    fn test_string_variants() {
        let cases = vec![
            (
                ForecastError::InvalidSeries("length mismatch".to_string()),
                "Invalid series: length mismatch",
            ),
            (
                ForecastError::TimestampOutOfRange("year 262144".to_string()),
                "Timestamp out of range: year 262144",
            ),
            (
                ForecastError::NumericalError("NaN encountered".to_string()),
                "Numerical error: NaN encountered",
            ),
            (
                ForecastError::Table("unequal lengths".to_string()),
                "Table error: unequal lengths",
            ),
            (
                ForecastError::Export("broken pipe".to_string()),
                "Export error: broken pipe",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::DegenerateStep);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }

    #[test]
    fn test_error_downcast() {
        let error: Box<dyn Error + Send + Sync> = Box::new(ForecastError::InsufficientData {
            required: 2,
            actual: 0,
        });
        let downcasted = error.downcast_ref::<ForecastError>();
        assert!(matches!(
            downcasted,
            Some(ForecastError::InsufficientData { required: 2, actual: 0 })
        ));
    }
}
