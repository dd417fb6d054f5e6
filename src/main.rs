//! Gauss Walk Bench
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌───────────┐    ┌──────────┐
//! │  Config  │───▶│  Harness  │───▶│ Simulator │───▶│  Stdout  │
//! │  (YAML)  │    │ (Instant) │    │ (StdRng)  │    │ (1 line) │
//! └──────────┘    └───────────┘    └───────────┘    └──────────┘
//! ```
//!
//! Takes no arguments. Prints one summary line on stdout; diagnostics go to
//! the log file.

use anyhow::{Context, Result};

use gauss_walk_bench::config::{AppConfig, DEFAULT_CONFIG_PATH};
use gauss_walk_bench::logging::init_logging;
use gauss_walk_bench::{BenchParams, WalkSimulator, run_benchmark};

fn main() -> Result<()> {
    let app_config = AppConfig::load_or_default(DEFAULT_CONFIG_PATH)
        .with_context(|| format!("Failed to load {}", DEFAULT_CONFIG_PATH))?;
    let _log_guard = init_logging(&app_config).context("Failed to initialise logging")?;

    let params = BenchParams::default();
    tracing::info!(
        git = env!("GIT_HASH"),
        paths = params.paths,
        steps = params.steps,
        repeats = params.repeats,
        "Starting random walk benchmark"
    );

    let mut sim = WalkSimulator::from_entropy();
    let stats = run_benchmark(&mut sim, &params)?;
    let summary = stats
        .summary()
        .context("Benchmark finished without recording a run")?;

    tracing::info!(
        mean_ms = summary.mean_ms,
        min_ms = summary.min_ms,
        min_ns = stats.min_ns(),
        "Benchmark complete"
    );
    println!("{}", summary);

    Ok(())
}
