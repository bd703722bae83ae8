//! Dominant sampling interval of a series

use chrono::Duration;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Rule that produced a [`StepEstimate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepSource {
    /// Fewer than two distinct timestamps; one day assumed
    Default,
    /// Most frequent gap between consecutive timestamps
    Mode,
    /// No gap recurs; median gap used instead
    Median,
    /// Dominant gap was zero and was replaced by one day
    DegenerateFallback,
}

impl std::fmt::Display for StepSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepSource::Default => "default",
            StepSource::Mode => "mode",
            StepSource::Median => "median",
            StepSource::DegenerateFallback => "degenerate-fallback",
        };
        write!(f, "{}", s)
    }
}

/// Estimated spacing between consecutive observations.
///
/// The interval is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEstimate {
    interval: Duration,
    source: StepSource,
}

impl StepEstimate {
    /// Fallback interval used whenever no positive step can be inferred
    pub fn default_interval() -> Duration {
        Duration::days(1)
    }

    /// Create an estimate; a non-positive interval is replaced by one day
    pub fn new(interval: Duration, source: StepSource) -> Self {
        if interval <= Duration::zero() {
            return Self::fallback(StepSource::DegenerateFallback);
        }
        Self { interval, source }
    }

    pub(crate) fn fallback(source: StepSource) -> Self {
        Self {
            interval: Self::default_interval(),
            source,
        }
    }

    /// One-day estimate used when there is nothing to infer from
    pub fn one_day() -> Self {
        Self::fallback(StepSource::Default)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn source(&self) -> StepSource {
        self.source
    }

    /// Interval in seconds, keeping any sub-second part
    pub fn interval_seconds(&self) -> f64 {
        let whole = self.interval.num_seconds();
        let nanos = (self.interval - Duration::seconds(whole))
            .num_nanoseconds()
            .unwrap_or(0);
        whole as f64 + nanos as f64 / 1e9
    }
}

// Serialized with the interval in (fractional) seconds
impl Serialize for StepEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StepEstimate", 2)?;
        state.serialize_field("interval_seconds", &self.interval_seconds())?;
        state.serialize_field("source", &self.source)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_interval_kept() {
        let step = StepEstimate::new(Duration::hours(6), StepSource::Mode);
        assert_eq!(step.interval(), Duration::hours(6));
        assert_eq!(step.source(), StepSource::Mode);
    }

    #[test]
    fn test_zero_interval_replaced_by_one_day() {
        let step = StepEstimate::new(Duration::zero(), StepSource::Mode);
        assert_eq!(step.interval(), Duration::days(1));
        assert_eq!(step.source(), StepSource::DegenerateFallback);
    }

    #[test]
    fn test_negative_interval_replaced_by_one_day() {
        let step = StepEstimate::new(Duration::seconds(-5), StepSource::Median);
        assert_eq!(step.interval(), Duration::days(1));
    }

    #[test]
    fn test_one_day_default() {
        let step = StepEstimate::one_day();
        assert_eq!(step.interval(), Duration::days(1));
        assert_eq!(step.source(), StepSource::Default);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(StepSource::Mode.to_string(), "mode");
        assert_eq!(StepSource::DegenerateFallback.to_string(), "degenerate-fallback");
    }

    #[test]
    fn test_serialize_in_seconds() {
        let step = StepEstimate::new(Duration::hours(1), StepSource::Median);
        let json = serde_json::to_value(step).unwrap();
        assert_eq!(json["interval_seconds"], 3600.0);
        assert_eq!(json["source"], "median");

        let fallback = StepEstimate::new(Duration::zero(), StepSource::Mode);
        let json = serde_json::to_value(fallback).unwrap();
        assert_eq!(json["source"], "degenerate-fallback");
    }

    #[test]
    fn test_sub_second_interval_keeps_precision() {
        let step = StepEstimate::new(Duration::milliseconds(500), StepSource::Mode);
        assert_eq!(step.interval_seconds(), 0.5);

        let json = serde_json::to_value(step).unwrap();
        assert_eq!(json["interval_seconds"], 0.5);
        assert!(json["interval_seconds"].as_f64().unwrap() > 0.0);

        let step = StepEstimate::new(Duration::milliseconds(90_250), StepSource::Median);
        assert_eq!(step.interval_seconds(), 90.25);
    }
}
