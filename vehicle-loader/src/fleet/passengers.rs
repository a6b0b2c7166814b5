//! Bounded passenger lists.

use std::fmt;

/// Error returned when a passenger list is already full.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("maximum number of passengers reached ({max}), cannot add {rejected}")]
pub struct CapacityExceeded {
    /// Capacity of the list that refused the passenger.
    pub max: usize,
    /// Name of the passenger that was turned away.
    pub rejected: String,
}

/// An ordered, append-only list of passenger names with a fixed capacity.
///
/// The list starts empty and never holds more than `max` names. A rejected
/// append leaves it unchanged.
///
/// # Examples
///
/// ```
/// use vehicle_loader::fleet::PassengerList;
///
/// let mut list = PassengerList::new(1);
/// list.push("Bronsky").unwrap();
/// assert!(list.push("Filochard").is_err());
/// assert_eq!(list.snapshot(), vec!["Bronsky".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerList {
    names: Vec<String>,
    max: usize,
}

impl PassengerList {
    /// Create an empty list holding at most `max` passengers.
    pub fn new(max: usize) -> Self {
        Self {
            names: Vec::with_capacity(max),
            max,
        }
    }

    /// Append a passenger, failing if the list is already full.
    pub fn push(&mut self, name: impl Into<String>) -> Result<(), CapacityExceeded> {
        let name = name.into();
        if self.is_full() {
            return Err(CapacityExceeded {
                max: self.max,
                rejected: name,
            });
        }
        self.names.push(name);
        Ok(())
    }

    /// Copy of the current passenger names, in boarding order.
    pub fn snapshot(&self) -> Vec<String> {
        self.names.clone()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= self.max
    }
}

impl fmt::Display for PassengerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}

/// Shared passenger handling for vehicles that carry passengers.
///
/// Implementors only expose their list; boarding and snapshots come from
/// the default methods.
pub trait CarriesPassengers {
    /// Most passengers this vehicle can carry besides its driver.
    const MAX_PASSENGERS: usize;

    fn passenger_list(&self) -> &PassengerList;

    fn passenger_list_mut(&mut self) -> &mut PassengerList;

    /// Board a passenger, failing if the vehicle is full.
    fn add_passenger(&mut self, name: impl Into<String>) -> Result<(), CapacityExceeded>
    where
        Self: Sized,
    {
        self.passenger_list_mut().push(name)
    }

    /// Copy of the current passengers, in boarding order.
    fn passengers(&self) -> Vec<String> {
        self.passenger_list().snapshot()
    }
}
