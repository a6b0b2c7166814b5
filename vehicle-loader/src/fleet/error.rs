//! Factory error types.
//!
//! Every variant carries the zero-based index of the record that failed,
//! since records have no other reliable identity before they are built.

use super::driver::InvalidDriver;
use super::kind::VehicleKind;
use super::passengers::CapacityExceeded;

/// Errors from building vehicles out of decoded records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The record's `type` is not a kind we know how to build
    #[error("record {index}: type {kind:?} not supported")]
    UnsupportedType { index: usize, kind: String },

    /// More passengers than the vehicle can carry
    #[error("record {index}: {kind} is full: {source}")]
    CapacityExceeded {
        index: usize,
        kind: VehicleKind,
        #[source]
        source: CapacityExceeded,
    },

    /// A required field is absent from the record
    #[error("record {index}: missing required field: {field}")]
    MissingField { index: usize, field: &'static str },

    /// A field is present but holds the wrong kind of JSON value
    #[error("record {index}: field {field} must be {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    /// The driver name failed validation
    #[error("record {index}: {source}")]
    InvalidDriver {
        index: usize,
        #[source]
        source: InvalidDriver,
    },
}

impl LoadError {
    /// Index of the record that caused the failure.
    pub fn index(&self) -> usize {
        match self {
            LoadError::UnsupportedType { index, .. }
            | LoadError::CapacityExceeded { index, .. }
            | LoadError::MissingField { index, .. }
            | LoadError::InvalidField { index, .. }
            | LoadError::InvalidDriver { index, .. } => *index,
        }
    }
}
