//! Dominant step inference
//!
//! Picks the interval used to extend a series into the future. The most
//! frequent gap between consecutive distinct timestamps wins; equally
//! frequent gaps resolve to the smallest one. When no gap occurs more than
//! once the median gap is used. Series with fewer than two distinct
//! timestamps, or whose dominant gap collapses to zero, fall back to one day.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use forecast_spi::{ForecastError, Result, StepEstimate, StepSource};
use tracing::{debug, warn};

/// Infer the dominant sampling interval of `timestamps`.
///
/// Input order and duplicates do not matter; only distinct values in
/// ascending order contribute gaps.
pub fn infer_step(timestamps: &[NaiveDateTime]) -> StepEstimate {
    let mut distinct = timestamps.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    if distinct.len() < 2 {
        debug!(
            distinct = distinct.len(),
            "not enough distinct timestamps, using one-day step"
        );
        return StepEstimate::one_day();
    }

    let gaps = consecutive_gaps(&distinct);

    match dominant_gap(&gaps) {
        Ok((interval, source)) => {
            debug!(
                interval_secs = interval.num_seconds(),
                %source,
                gaps = gaps.len(),
                "inferred step"
            );
            StepEstimate::new(interval, source)
        }
        Err(err) => {
            warn!(error = %err, "recovering degenerate step with one-day default");
            StepEstimate::new(StepEstimate::default_interval(), StepSource::DegenerateFallback)
        }
    }
}

/// Differences between adjacent timestamps
pub fn consecutive_gaps(timestamps: &[NaiveDateTime]) -> Vec<Duration> {
    timestamps.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Most frequent gap, or None when no gap occurs more than once.
///
/// Ties resolve to the smallest gap.
pub fn mode_gap(gaps: &[Duration]) -> Option<Duration> {
    let mut counts: BTreeMap<Duration, usize> = BTreeMap::new();
    for &gap in gaps {
        *counts.entry(gap).or_insert(0) += 1;
    }

    // BTreeMap iterates in ascending order, so a strict comparison keeps the
    // smallest gap among equally frequent ones.
    let mut best: Option<(Duration, usize)> = None;
    for (&gap, &count) in &counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((gap, count)),
        }
    }

    match best {
        Some((gap, count)) if count > 1 => Some(gap),
        _ => None,
    }
}

/// Median gap; the mean of the two middle gaps for an even count
pub fn median_gap(gaps: &[Duration]) -> Option<Duration> {
    if gaps.is_empty() {
        return None;
    }

    let mut sorted = gaps.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        let (lo, hi) = (sorted[mid - 1], sorted[mid]);
        Some(lo + (hi - lo) / 2)
    }
}

/// Mode, then median. A zero result is reported as `DegenerateStep`.
fn dominant_gap(gaps: &[Duration]) -> Result<(Duration, StepSource)> {
    let (interval, source) = match mode_gap(gaps) {
        Some(gap) => (gap, StepSource::Mode),
        None => {
            let gap = median_gap(gaps).ok_or(ForecastError::DegenerateStep)?;
            (gap, StepSource::Median)
        }
    };

    if interval <= Duration::zero() {
        return Err(ForecastError::DegenerateStep);
    }

    Ok((interval, source))
}
