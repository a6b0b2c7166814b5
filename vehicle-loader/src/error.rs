//! Crate-level error type.

use crate::fleet::LoadError;
use crate::records::DecodeError;

/// Anything that can go wrong between a JSON blob and a list of vehicles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The blob could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A decoded record could not be turned into a vehicle
    #[error(transparent)]
    Load(#[from] LoadError),
}
