// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for the calculation engine

use ecoethics_metrics::UnknownName;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InputError>;

/// Rejected calculation input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} = {value} is outside the allowed range {range}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown hardware: {0}")]
    UnknownHardware(String),

    #[error("Unknown model type: {0}")]
    UnknownModelType(String),
}

impl From<UnknownName> for InputError {
    fn from(err: UnknownName) -> Self {
        match err {
            UnknownName::Location(name) => InputError::UnknownLocation(name),
            UnknownName::Hardware(name) => InputError::UnknownHardware(name),
            UnknownName::ModelType(name) => InputError::UnknownModelType(name),
        }
    }
}
