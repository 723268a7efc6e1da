//! Error types for rfchain-core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("frequency {frequency:.6e} Hz is outside the characterized range [{min:.6e}, {max:.6e}] Hz")]
    FrequencyOutOfRange { frequency: f64, min: f64, max: f64 },

    #[error("invalid frequency: {0} Hz")]
    InvalidFrequency(f64),

    #[error("invalid characterization table: {0}")]
    InvalidTable(String),
}

impl Error {
    /// Shorthand for an out-of-domain construction parameter.
    pub fn invalid_parameter(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
