//! Per-algorithm timing aggregation.

use std::time::Duration;

use crate::mst::MstAlgorithm;

/// Mean, minimum, and maximum elapsed time for one engine across a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingSummary {
    algorithm: MstAlgorithm,
    samples: usize,
    mean: Duration,
    min: Duration,
    max: Duration,
}

impl TimingSummary {
    /// Aggregates `durations` for `algorithm`.
    ///
    /// The mean is computed over whole nanoseconds and truncated. An empty
    /// input yields zero for every statistic.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use spanforest_core::{MstAlgorithm, TimingSummary};
    ///
    /// let summary = TimingSummary::from_durations(
    ///     MstAlgorithm::Prim,
    ///     [Duration::from_micros(2), Duration::from_micros(4)],
    /// );
    /// assert_eq!(summary.mean(), Duration::from_micros(3));
    /// assert_eq!(summary.max(), Duration::from_micros(4));
    /// ```
    #[must_use]
    pub fn from_durations(
        algorithm: MstAlgorithm,
        durations: impl IntoIterator<Item = Duration>,
    ) -> Self {
        let mut samples = 0_usize;
        let mut total: u128 = 0;
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;
        for duration in durations {
            samples += 1;
            total += duration.as_nanos();
            min = min.min(duration);
            max = max.max(duration);
        }
        if samples == 0 {
            return Self {
                algorithm,
                samples,
                mean: Duration::ZERO,
                min: Duration::ZERO,
                max: Duration::ZERO,
            };
        }
        let mean_nanos = total / samples as u128;
        Self {
            algorithm,
            samples,
            mean: Duration::from_nanos(u64::try_from(mean_nanos).unwrap_or(u64::MAX)),
            min,
            max,
        }
    }

    /// Engine these timings belong to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Number of timings aggregated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn samples(&self) -> usize { self.samples }

    /// Arithmetic mean elapsed time.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mean(&self) -> Duration { self.mean }

    /// Fastest single run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min(&self) -> Duration { self.min }

    /// Slowest single run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max(&self) -> Duration { self.max }
}

/// Picks the engine with the lower mean; Kruskal wins ties.
pub(crate) fn faster(kruskal: &TimingSummary, prim: &TimingSummary) -> MstAlgorithm {
    if prim.mean < kruskal.mean {
        MstAlgorithm::Prim
    } else {
        MstAlgorithm::Kruskal
    }
}
