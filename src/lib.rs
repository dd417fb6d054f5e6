//! Gauss Walk Bench - Gaussian random-walk micro-benchmark
//!
//! Measures how long it takes to generate a batch of independent random
//! walks, each the sum of standard-normal increments.
//!
//! # Modules
//!
//! - [`bench`] - Simulator and timing harness
//! - [`perf`] - Running sum/min timing statistics
//! - [`config`] - Logging configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Library error type

pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod perf;

// Convenient re-exports at crate root
pub use bench::harness::{BenchParams, measure, run_benchmark};
pub use bench::walk::WalkSimulator;
pub use config::AppConfig;
pub use error::BenchError;
pub use perf::{TimingStats, TimingSummary};
