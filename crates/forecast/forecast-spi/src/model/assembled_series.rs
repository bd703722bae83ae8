//! History and forecast merged into one labelled series

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Whether a record was observed or generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    History,
    Forecast,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::History => write!(f, "History"),
            Phase::Forecast => write!(f, "Forecast"),
        }
    }
}

/// One point of an [`AssembledSeries`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssembledRecord {
    pub timestamp: NaiveDateTime,
    pub value: f64,
    pub phase: Phase,
}

/// Ordered records where every History record precedes every Forecast record
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AssembledSeries {
    records: Vec<AssembledRecord>,
}

impl AssembledSeries {
    /// Create a series from records, checking that timestamps strictly
    /// increase and that no History record follows a Forecast record.
    pub fn new(records: Vec<AssembledRecord>) -> Result<Self> {
        if let Some(i) = records
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(ForecastError::InvalidSeries(format!(
                "assembled timestamps must be strictly increasing: {} is followed by {}",
                records[i].timestamp,
                records[i + 1].timestamp
            )));
        }
        if records
            .windows(2)
            .any(|w| w[0].phase == Phase::Forecast && w[1].phase == Phase::History)
        {
            return Err(ForecastError::InvalidSeries(
                "history record after a forecast record".to_string(),
            ));
        }
        Ok(Self { records })
    }

    /// Wrap records that are already in History-then-Forecast order.
    ///
    /// Only the assembler should call this; it is the one place that
    /// establishes the ordering.
    pub fn from_ordered_records(records: Vec<AssembledRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AssembledRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssembledRecord> {
        self.records.iter()
    }

    /// Records for one phase, in order
    pub fn phase(&self, phase: Phase) -> impl Iterator<Item = &AssembledRecord> {
        self.records.iter().filter(move |r| r.phase == phase)
    }

    /// Number of History records, which is also the index of the first
    /// Forecast record.
    pub fn history_len(&self) -> usize {
        self.records
            .iter()
            .take_while(|r| r.phase == Phase::History)
            .count()
    }

    pub fn forecast_len(&self) -> usize {
        self.len() - self.history_len()
    }

    pub fn into_records(self) -> Vec<AssembledRecord> {
        self.records
    }
}

impl<'de> Deserialize<'de> for AssembledSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            records: Vec<AssembledRecord>,
        }

        let raw = Raw::deserialize(deserializer)?;
        AssembledSeries::new(raw.records).map_err(serde::de::Error::custom)
    }
}
