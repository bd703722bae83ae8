//! Future timestamp generation

use chrono::{Duration, NaiveDateTime};
use forecast_spi::{ForecastError, Result};

/// Timestamps `last + step, last + 2*step, ..., last + horizon*step`.
pub fn future_index(
    last_timestamp: NaiveDateTime,
    step: Duration,
    horizon: usize,
) -> Result<Vec<NaiveDateTime>> {
    if horizon == 0 {
        return Err(ForecastError::invalid_horizon(0, "must be a positive integer"));
    }
    if step <= Duration::zero() {
        return Err(ForecastError::invalid_configuration(
            "step",
            format!("must be a positive duration, got {}", step),
        ));
    }

    let mut index = Vec::with_capacity(horizon);
    let mut current = last_timestamp;
    for _ in 0..horizon {
        current = current.checked_add_signed(step).ok_or_else(|| {
            ForecastError::TimestampOutOfRange(format!("{} + {} overflows", current, step))
        })?;
        index.push(current);
    }

    Ok(index)
}
