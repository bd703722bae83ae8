//! Merge history and forecast into one phase-labelled series

use forecast_spi::{
    AssembledRecord, AssembledSeries, ForecastError, ForecastResult, Phase, Result, TimeSeries,
};

/// Concatenate `history` (tagged History) and `forecast` (tagged Forecast).
///
/// The forecast must start strictly after the last historical timestamp,
/// which holds for any result the engine produced from the same history.
pub fn assemble(history: &TimeSeries, forecast: &ForecastResult) -> Result<AssembledSeries> {
    if let (Some(last), Some(first)) = (history.last_timestamp(), forecast.first_timestamp()) {
        if first <= last {
            return Err(ForecastError::InvalidSeries(format!(
                "forecast starts at {} but history ends at {}",
                first, last
            )));
        }
    }

    let mut records = Vec::with_capacity(history.len() + forecast.horizon());
    records.extend(history.iter().map(|(timestamp, value)| AssembledRecord {
        timestamp,
        value,
        phase: Phase::History,
    }));
    records.extend(forecast.iter().map(|(timestamp, value)| AssembledRecord {
        timestamp,
        value,
        phase: Phase::Forecast,
    }));

    Ok(AssembledSeries::from_ordered_records(records))
}
