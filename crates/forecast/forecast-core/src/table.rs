//! Delimited table ingestion
//!
//! The first column holds timestamps and the target column is picked by
//! header name. Cells that fail to parse become missing instead of failing
//! the whole read; [`crate::clean`] drops those rows afterwards.

use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use forecast_spi::{ForecastError, Result};
use tracing::debug;

use crate::clean::Observation;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parse a timestamp cell; None when no known format matches
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a numeric cell; None when empty, unparsable or not finite
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Reader for delimited tables with a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableReader {
    delimiter: u8,
}

impl Default for TableReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different field delimiter, e.g. `b';'` or `b'\t'`
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Header names of a table
    pub fn headers<R: Read>(&self, reader: R) -> Result<Vec<String>> {
        let mut csv = self.csv_reader(reader);
        let headers = csv
            .headers()
            .map_err(|e| ForecastError::Table(e.to_string()))?;
        Ok(headers.iter().map(String::from).collect())
    }

    /// Read `(timestamp, target)` observations from a table
    pub fn read<R: Read>(&self, reader: R, target: &str) -> Result<Vec<Observation>> {
        let mut csv = self.csv_reader(reader);

        let headers = csv
            .headers()
            .map_err(|e| ForecastError::Table(e.to_string()))?
            .clone();

        let target_idx = headers
            .iter()
            .position(|h| h == target)
            .ok_or_else(|| {
                ForecastError::invalid_configuration(
                    "target",
                    format!("column '{}' not found", target),
                )
            })?;
        if target_idx == 0 {
            return Err(ForecastError::invalid_configuration(
                "target",
                format!("column '{}' is the timestamp column", target),
            ));
        }

        let mut observations = Vec::new();
        for record in csv.records() {
            let record = record.map_err(|e| ForecastError::Table(e.to_string()))?;
            observations.push(Observation::new(
                record.get(0).and_then(parse_timestamp),
                record.get(target_idx).and_then(parse_value),
            ));
        }

        debug!(
            rows = observations.len(),
            column = target,
            timestamp_column = headers.get(0).unwrap_or_default(),
            "read table"
        );

        Ok(observations)
    }

    fn csv_reader<R: Read>(&self, reader: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader)
    }
}

/// Read observations from a comma-separated table
pub fn read_observations<R: Read>(reader: R, target: &str) -> Result<Vec<Observation>> {
    TableReader::new().read(reader, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = date(2024, 3, 15);
        assert_eq!(parse_timestamp("2024-03-15"), Some(expected));
        assert_eq!(parse_timestamp("2024/03/15"), Some(expected));
        assert_eq!(parse_timestamp("15/03/2024"), Some(expected));
        assert_eq!(parse_timestamp(" 2024-03-15 00:00:00 "), Some(expected));
        assert_eq!(parse_timestamp("2024-03-15T00:00:00"), Some(expected));
    }

    #[test]
    fn test_parse_timestamp_with_time_and_offset() {
        let with_time = parse_timestamp("2024-03-15 13:45:10").unwrap();
        assert_eq!(with_time, date(2024, 3, 15) + chrono::Duration::seconds(49_510));

        let rfc = parse_timestamp("2024-03-15T14:00:00+01:00").unwrap();
        assert_eq!(rfc, date(2024, 3, 15) + chrono::Duration::hours(13));

        let fractional = parse_timestamp("2024-03-15 00:00:00.5").unwrap();
        assert_eq!(fractional, date(2024, 3, 15) + chrono::Duration::milliseconds(500));
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2024-13-40"), None);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 12.5 "), Some(12.5));
        assert_eq!(parse_value("-3"), Some(-3.0));
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("n/a"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
    }

    #[test]
    fn test_read_target_column() {
        let data = "date,sales,visits\n2024-01-01,10,100\n2024-01-02,12,110\n";
        let rows = read_observations(data.as_bytes(), "visits").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Observation::complete(date(2024, 1, 1), 100.0));
        assert_eq!(rows[1], Observation::complete(date(2024, 1, 2), 110.0));
    }

    #[test]
    fn test_unparsable_cells_become_missing() {
        let data = "date,sales\nyesterday,10\n2024-01-02,\n2024-01-03,abc\n2024-01-04,4\n";
        let rows = read_observations(data.as_bytes(), "sales").unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].timestamp, None);
        assert_eq!(rows[1].value, None);
        assert_eq!(rows[2].value, None);
        assert!(rows[3].is_complete());
    }

    #[test]
    fn test_unknown_target_column() {
        let data = "date,sales\n2024-01-01,1\n";
        let err = read_observations(data.as_bytes(), "profit").unwrap_err();
        assert!(matches!(err, ForecastError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_target_cannot_be_timestamp_column() {
        let data = "date,sales\n2024-01-01,1\n";
        let err = read_observations(data.as_bytes(), "date").unwrap_err();
        assert!(err.to_string().contains("timestamp column"));
    }

    #[test]
    fn test_ragged_rows_are_table_errors() {
        let data = "date,sales\n2024-01-01,1,extra\n";
        let err = read_observations(data.as_bytes(), "sales").unwrap_err();
        assert!(matches!(err, ForecastError::Table(_)));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let data = "tanggal;penjualan\n01/02/2024;7,5\n";
        let reader = TableReader::new().delimiter(b';');
        let rows = reader.read(data.as_bytes(), "penjualan").unwrap();
        assert_eq!(rows[0].timestamp, Some(date(2024, 2, 1)));
        // Decimal commas are not numbers
        assert_eq!(rows[0].value, None);
    }

    #[test]
    fn test_headers() {
        let data = "date, a ,b\n";
        let headers = TableReader::new().headers(data.as_bytes()).unwrap();
        assert_eq!(headers, vec!["date", "a", "b"]);
    }
}
