//! Benchmark Harness
//!
//! Times repeated simulator runs with a monotonic clock and folds the
//! elapsed times into [`TimingStats`].

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use crate::bench::walk::WalkSimulator;
use crate::error::BenchError;
use crate::perf::TimingStats;

/// Fixed measurement protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchParams {
    /// Independent paths per run (n)
    pub paths: usize,
    /// Increments per path (T)
    pub steps: usize,
    /// Timed runs (R)
    pub repeats: usize,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            paths: 1024,
            steps: 100,
            repeats: 10,
        }
    }
}

/// Measure wall-clock time for a synchronous operation.
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Run the simulator `params.repeats` times and collect timing stats.
///
/// Each run allocates a fresh path array, which is dropped right after the
/// clock stops.
pub fn run_benchmark<R: Rng>(
    sim: &mut WalkSimulator<R>,
    params: &BenchParams,
) -> Result<TimingStats, BenchError> {
    if params.repeats == 0 {
        return Err(BenchError::NoRepeats);
    }

    let mut stats = TimingStats::new();
    for run in 0..params.repeats {
        let (paths, elapsed) = measure(|| black_box(sim.simulate(params.paths, params.steps)));
        drop(paths);

        stats.record(elapsed);
        debug!(run, elapsed_us = elapsed.as_micros() as u64, "run complete");
    }

    Ok(stats)
}
