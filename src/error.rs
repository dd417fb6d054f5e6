use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to open log file: {0}")]
    LogAppender(#[from] tracing_appender::rolling::InitError),

    #[error("Benchmark needs at least one repeat")]
    NoRepeats,
}
