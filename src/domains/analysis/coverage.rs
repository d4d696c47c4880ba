//! Coverage statistics over a list of tower records.
//!
//! Missing `averageSignal` and `samples` values count as 0. This pulls the
//! average (and possibly the strongest/weakest values) towards zero when the
//! upstream omits those fields.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domains::api::Tower;

/// Label used in the radio distribution for records without a radio type.
pub const UNKNOWN_RADIO: &str = "Unknown";

/// Upstream values that cannot be summarized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// The summed sample count does not fit the reported integer type.
    #[error("total samples out of range: {0}")]
    SampleOverflow(i128),
}

/// Aggregate coverage statistics for a set of towers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageAnalysis {
    pub total_towers: usize,
    pub radio_distribution: BTreeMap<String, usize>,
    pub signal_stats: SignalStats,
    pub sample_stats: SampleStats,
}

/// Signal strength statistics, in dBm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalStats {
    pub average: f64,
    pub strongest: i64,
    pub weakest: i64,
}

/// Sample count statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleStats {
    pub total_samples: i64,
    pub avg_samples_per_tower: f64,
}

/// Compute coverage statistics in a single pass.
///
/// Returns `Ok(None)` for an empty slice, where averages are undefined.
/// Sums are kept in `i128`, which cannot overflow for any slice of `i64`
/// values; only a sample total outside `i64` is an error.
pub fn analyze(towers: &[Tower]) -> Result<Option<CoverageAnalysis>, CoverageError> {
    if towers.is_empty() {
        return Ok(None);
    }

    let mut radio_distribution = BTreeMap::new();
    let mut signal_sum = 0i128;
    let mut strongest = i64::MIN;
    let mut weakest = i64::MAX;
    let mut sample_sum = 0i128;

    for tower in towers {
        let radio = tower.radio.as_deref().unwrap_or(UNKNOWN_RADIO);
        *radio_distribution.entry(radio.to_string()).or_insert(0) += 1;

        let signal = tower.average_signal.unwrap_or(0);
        signal_sum += i128::from(signal);
        strongest = strongest.max(signal);
        weakest = weakest.min(signal);

        sample_sum += i128::from(tower.samples.unwrap_or(0));
    }

    let total_samples =
        i64::try_from(sample_sum).map_err(|_| CoverageError::SampleOverflow(sample_sum))?;
    let count = towers.len() as f64;

    Ok(Some(CoverageAnalysis {
        total_towers: towers.len(),
        radio_distribution,
        signal_stats: SignalStats {
            average: signal_sum as f64 / count,
            strongest,
            weakest,
        },
        sample_stats: SampleStats {
            total_samples,
            avg_samples_per_tower: total_samples as f64 / count,
        },
    }))
}
