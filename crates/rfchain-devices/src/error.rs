//! Error types for rfchain-devices.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] rfchain_core::Error),

    #[error("unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("{component} is missing parameter {parameter}")]
    MissingParameter { component: String, parameter: String },

    #[error("{component} has no parameter named {parameter}")]
    UnknownParameter { component: String, parameter: String },

    #[error("parameter {parameter} of {component} must be {expected}")]
    ParameterType {
        component: String,
        parameter: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
