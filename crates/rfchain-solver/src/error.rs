//! Error types for rfchain-solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] rfchain_core::Error),

    #[error(transparent)]
    Device(#[from] rfchain_devices::Error),

    #[error("label already in chain: {0}")]
    DuplicateLabel(String),

    #[error("no component labelled {0}")]
    UnknownLabel(String),

    #[error("start index {start} is after end index {end}")]
    InvalidOrder { start: usize, end: usize },

    #[error("index {index} out of range for chain of {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
