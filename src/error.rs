use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// A worker task panicked or was cancelled before reporting back.
    #[error("worker failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
