//! Vehicle model and factory.
//!
//! This module contains the typed vehicles built from decoded records.
//! Each type enforces its invariants at construction time: a `Driver` is
//! never empty, and a passenger list never holds more names than its
//! vehicle can carry.

mod driver;
mod error;
mod kind;
mod load;
mod passengers;
mod vehicle;

pub use driver::{Driver, InvalidDriver, VehicleId};
pub use error::LoadError;
pub use kind::VehicleKind;
pub use load::load;
pub use passengers::{CapacityExceeded, CarriesPassengers, PassengerList};
pub use vehicle::{Bike, QuadCycle, Tandem, Vehicle};
