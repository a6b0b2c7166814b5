//! Vehicle record decoding.
//!
//! This module turns a JSON blob into an ordered list of loosely-typed
//! records. It only checks that the blob is a well-formed array of JSON
//! objects; whether a record describes a vehicle we can build is
//! decided later by [`crate::fleet::load`].

mod decode;
mod error;
mod types;

pub use decode::decode;
pub use error::DecodeError;
pub use types::VehicleRecord;
