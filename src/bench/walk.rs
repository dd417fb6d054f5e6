//! Gaussian random-walk simulator
//!
//! Each path is the sum of `steps` independent standard-normal increments.
//! The generator is owned by the simulator, so a seeded instance always
//! reproduces the same paths.
//!
//! # Example
//!
//! ```rust
//! use gauss_walk_bench::bench::walk::WalkSimulator;
//!
//! let mut sim = WalkSimulator::seeded(42);
//! let paths = sim.simulate(1024, 100);
//! assert_eq!(paths.len(), 1024);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Batch generator of independent Gaussian random walks
#[derive(Debug, Clone)]
pub struct WalkSimulator<R = StdRng> {
    rng: R,
}

impl WalkSimulator<StdRng> {
    /// Deterministic simulator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Simulator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> WalkSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Final position of `paths` independent walks of `steps` increments each.
    ///
    /// Draws are consumed path by path: all increments of path 0, then path 1.
    /// `paths == 0` yields an empty vec, `steps == 0` leaves every path at 0.0.
    pub fn simulate(&mut self, paths: usize, steps: usize) -> Vec<f64> {
        let mut x = vec![0.0; paths];
        for xi in x.iter_mut() {
            *xi = self.walk(steps);
        }
        x
    }

    /// One path: sequential sum of `steps` draws, in generation order.
    #[inline]
    pub fn walk(&mut self, steps: usize) -> f64 {
        let mut x_t = 0.0;
        for _ in 0..steps {
            x_t += self.rng.sample::<f64, _>(StandardNormal);
        }
        x_t
    }
}
