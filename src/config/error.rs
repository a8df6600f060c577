//! Errors raised while reading, validating or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No home directory to place the configuration in")]
    HomeDirectoryNotFound,

    /// `save` was called before `load` chose a file.
    #[error("Configuration has no file yet, load it before saving")]
    NotLoaded,

    #[error("Cannot create configuration directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid configuration: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Cannot encode configuration: {0}")]
    Encode(String),

    #[error("backend.failure_rate must be between 0 and 1, got {0}")]
    InvalidFailureRate(f64),

    #[error("backend.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("backend.timeout_ms must be greater than 0")]
    ZeroTimeout,

    #[error("timings.{name} is {value_ms} ms, the limit is {max_ms} ms")]
    TimingTooLong {
        name: &'static str,
        value_ms: u64,
        max_ms: u64,
    },
}
