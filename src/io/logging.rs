use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::model::config::LogConfig;

/// Environment variable holding an `EnvFilter` directive; wins over `[log] level`
pub const LOG_ENV: &str = "TODO_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Filter from the env var value if set, else from the configured level
pub fn build_filter(env_value: Option<&str>, level: &str) -> Result<EnvFilter, ParseError> {
    match env_value {
        Some(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(level),
    }
}

/// Install the global subscriber writing to the configured log file.
/// Returns false (and installs nothing) when no file is configured.
pub fn init_logging(log: &LogConfig) -> Result<bool, LogError> {
    let Some(path) = &log.file else {
        return Ok(false);
    };

    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref(), &log.level)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| LogError::Open {
            path: path.clone(),
            source: e,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::Open {
            path: path.clone(),
            source: e,
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(true)
}
