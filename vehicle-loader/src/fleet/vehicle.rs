//! Typed vehicles.

use std::fmt;

use super::driver::{Driver, VehicleId};
use super::kind::VehicleKind;
use super::passengers::{CapacityExceeded, CarriesPassengers, PassengerList};

/// A bicycle. Driver only, no passengers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bike {
    id: VehicleId,
    driver: Driver,
}

impl Bike {
    pub fn new(id: VehicleId, driver: Driver) -> Self {
        Self { id, driver }
    }
}

/// A two-seater bicycle with room for one passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tandem {
    id: VehicleId,
    driver: Driver,
    passengers: PassengerList,
}

impl Tandem {
    pub fn new(id: VehicleId, driver: Driver) -> Self {
        Self {
            id,
            driver,
            passengers: PassengerList::new(Self::MAX_PASSENGERS),
        }
    }
}

impl CarriesPassengers for Tandem {
    const MAX_PASSENGERS: usize = VehicleKind::Tandem.max_passengers();

    fn passenger_list(&self) -> &PassengerList {
        &self.passengers
    }

    fn passenger_list_mut(&mut self) -> &mut PassengerList {
        &mut self.passengers
    }
}

/// A four-seat pedal car with room for three passengers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadCycle {
    id: VehicleId,
    driver: Driver,
    passengers: PassengerList,
}

impl QuadCycle {
    pub fn new(id: VehicleId, driver: Driver) -> Self {
        Self {
            id,
            driver,
            passengers: PassengerList::new(Self::MAX_PASSENGERS),
        }
    }
}

impl CarriesPassengers for QuadCycle {
    const MAX_PASSENGERS: usize = VehicleKind::QuadCycle.max_passengers();

    fn passenger_list(&self) -> &PassengerList {
        &self.passengers
    }

    fn passenger_list_mut(&mut self) -> &mut PassengerList {
        &mut self.passengers
    }
}

/// Any vehicle built by the factory.
///
/// Identity and driver are fixed at construction; the passenger list only
/// grows, up to the kind's capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vehicle {
    Bike(Bike),
    Tandem(Tandem),
    QuadCycle(QuadCycle),
}

impl Vehicle {
    /// Build an empty vehicle of the given kind.
    pub fn new(kind: VehicleKind, id: VehicleId, driver: Driver) -> Self {
        match kind {
            VehicleKind::Bike => Vehicle::Bike(Bike::new(id, driver)),
            VehicleKind::Tandem => Vehicle::Tandem(Tandem::new(id, driver)),
            VehicleKind::QuadCycle => Vehicle::QuadCycle(QuadCycle::new(id, driver)),
        }
    }

    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Bike(_) => VehicleKind::Bike,
            Vehicle::Tandem(_) => VehicleKind::Tandem,
            Vehicle::QuadCycle(_) => VehicleKind::QuadCycle,
        }
    }

    pub fn id(&self) -> VehicleId {
        match self {
            Vehicle::Bike(v) => v.id,
            Vehicle::Tandem(v) => v.id,
            Vehicle::QuadCycle(v) => v.id,
        }
    }

    pub fn driver(&self) -> &Driver {
        match self {
            Vehicle::Bike(v) => &v.driver,
            Vehicle::Tandem(v) => &v.driver,
            Vehicle::QuadCycle(v) => &v.driver,
        }
    }

    /// The passenger list, or `None` for vehicles that carry no passengers.
    pub fn passenger_list(&self) -> Option<&PassengerList> {
        match self {
            Vehicle::Bike(_) => None,
            Vehicle::Tandem(v) => Some(v.passenger_list()),
            Vehicle::QuadCycle(v) => Some(v.passenger_list()),
        }
    }

    /// Copy of the current passengers. Always empty for a bike.
    pub fn passengers(&self) -> Vec<String> {
        self.passenger_list()
            .map(PassengerList::snapshot)
            .unwrap_or_default()
    }

    pub fn max_passengers(&self) -> usize {
        self.kind().max_passengers()
    }

    /// Board a passenger. A bike has no seats, so it refuses everyone.
    pub fn add_passenger(&mut self, name: impl Into<String>) -> Result<(), CapacityExceeded> {
        match self {
            Vehicle::Bike(_) => Err(CapacityExceeded {
                max: 0,
                rejected: name.into(),
            }),
            Vehicle::Tandem(v) => v.add_passenger(name),
            Vehicle::QuadCycle(v) => v.add_passenger(name),
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {} driven by {}", self.kind(), self.id(), self.driver())?;
        if let Some(passengers) = self.passenger_list() {
            write!(f, ", with: {passengers}")?;
        }
        f.write_str(">")
    }
}
