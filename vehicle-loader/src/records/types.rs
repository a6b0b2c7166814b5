//! Vehicle record DTOs.
//!
//! Records are loosely typed: each known key holds whatever JSON value the
//! input had, or `None` when the key is absent (or `null`). Checking that a
//! value has the right type is left to the factory, which knows which
//! fields matter for which vehicle kind.

use serde::Deserialize;
use serde_json::Value;

/// One decoded input entry describing a vehicle to construct.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VehicleRecord {
    /// Vehicle type tag, expected to be a string (`velo`, `tandem`, `rosalie`).
    #[serde(rename = "type")]
    pub kind: Option<Value>,

    /// Name of the driver, expected to be a string.
    pub conducteur: Option<Value>,

    /// Identifier assigned by the source data, expected to be an integer.
    pub id: Option<Value>,

    /// Passenger names in boarding order, expected to be an array of strings.
    /// Only read for passenger-carrying vehicles.
    pub passagers: Option<Value>,
}
