//! Timing Statistics - running sum and minimum of per-run wall-clock time
//!
//! Individual samples are not retained: a run is folded into the totals as
//! soon as it is recorded.

use std::fmt;
use std::time::Duration;

/// Running `(sum, min, count)` over elapsed-time samples, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub total_secs: f64,
    pub min_secs: f64,
    pub runs: usize,
}

impl Default for TimingStats {
    fn default() -> Self {
        TimingStats {
            total_secs: 0.0,
            min_secs: f64::INFINITY,
            runs: 0,
        }
    }
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of elapsed times (seconds) into stats
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        samples
            .into_iter()
            .fold(Self::default(), |stats, secs| stats.with_sample(secs))
    }

    /// One fold step
    #[inline]
    pub fn with_sample(self, secs: f64) -> Self {
        TimingStats {
            total_secs: self.total_secs + secs,
            min_secs: self.min_secs.min(secs),
            runs: self.runs + 1,
        }
    }

    /// Record one measured run
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        *self = self.with_sample(elapsed.as_secs_f64());
    }

    /// Mean time per run in milliseconds
    pub fn mean_ms(&self) -> Option<f64> {
        if self.runs == 0 {
            return None;
        }
        Some(self.total_secs / self.runs as f64 * 1000.0)
    }

    /// Fastest run in milliseconds
    pub fn min_ms(&self) -> Option<f64> {
        if self.runs == 0 {
            return None;
        }
        Some(self.min_secs * 1000.0)
    }

    /// Fastest run in whole nanoseconds
    pub fn min_ns(&self) -> Option<u64> {
        if self.runs == 0 {
            return None;
        }
        Some((self.min_secs * 1e9).round() as u64)
    }

    pub fn summary(&self) -> Option<TimingSummary> {
        Some(TimingSummary {
            mean_ms: self.mean_ms()?,
            min_ms: self.min_ms()?,
        })
    }
}

/// Final report, printed as the benchmark's single output line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    pub mean_ms: f64,
    pub min_ms: f64,
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The mean time was {:.3}ms, the min was {:.3}ms",
            self.mean_ms, self.min_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(values: &[u64]) -> Vec<f64> {
        values.iter().map(|&v| v as f64 / 1000.0).collect()
    }

    #[test]
    fn test_synthetic_samples() {
        let stats = TimingStats::from_samples(ms(&[5, 4, 6, 5, 5, 5, 5, 5, 5, 5]));

        assert_eq!(stats.runs, 10);
        let mean = stats.mean_ms().unwrap();
        let min = stats.min_ms().unwrap();
        assert!((mean - 5.0).abs() < 1e-9, "mean should be 5ms, got {}", mean);
        assert!((min - 4.0).abs() < 1e-9, "min should be 4ms, got {}", min);
        assert_eq!(stats.min_ns(), Some(4_000_000));
    }

    #[test]
    fn test_empty_has_no_summary() {
        let stats = TimingStats::new();
        assert_eq!(stats.min_secs, f64::INFINITY);
        assert_eq!(stats.mean_ms(), None);
        assert_eq!(stats.min_ns(), None);
        assert!(stats.summary().is_none());
    }

    #[test]
    fn test_record_matches_fold() {
        let mut recorded = TimingStats::new();
        for millis in [3, 7, 2] {
            recorded.record(Duration::from_millis(millis));
        }
        let folded = TimingStats::from_samples(ms(&[3, 7, 2]));

        assert_eq!(recorded.runs, folded.runs);
        assert!((recorded.total_secs - folded.total_secs).abs() < 1e-12);
        assert_eq!(recorded.min_secs, folded.min_secs);
    }

    #[test]
    fn test_min_never_exceeds_mean() {
        let stats = TimingStats::from_samples(ms(&[9, 1, 4, 4, 12]));
        let summary = stats.summary().unwrap();
        assert!(summary.min_ms <= summary.mean_ms);
    }

    #[test]
    fn test_summary_line() {
        let summary = TimingSummary {
            mean_ms: 5.0,
            min_ms: 4.25,
        };
        assert_eq!(
            summary.to_string(),
            "The mean time was 5.000ms, the min was 4.250ms"
        );
    }
}
