use crate::config::AppConfig;
use crate::error::BenchError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Keep the returned guard alive until exit,
/// dropping it flushes the file writer. Fails without installing anything
/// if the log directory cannot be created or the level does not parse.
///
/// Nothing is ever written to stdout: the benchmark owns that stream.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard, BenchError> {
    // Filter comes from config only, RUST_LOG is not consulted
    let filter = EnvFilter::try_new(&config.log_level)?;

    let rotation = match config.rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    };
    let file_appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&config.log_file)
        .build(&config.log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // Keep target in JSON for structured queries
            .with_writer(non_blocking)
            .with_ansi(false);
        let stderr_layer = config
            .log_to_stderr
            .then(|| fmt::layer().json().with_writer(std::io::stderr));
        registry.with(file_layer).with(stderr_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false) // Hide redundant target in text output
            .with_writer(non_blocking)
            .with_ansi(false);
        let stderr_layer = config.log_to_stderr.then(|| {
            fmt::layer()
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
        });
        registry.with(file_layer).with(stderr_layer).init();
    }

    Ok(guard)
}
