//! Who drives a vehicle, and which vehicle it is.

use std::fmt;

/// A driver name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid driver: {reason}")]
pub struct InvalidDriver {
    reason: &'static str,
}

/// Whoever is pedalling at the front.
///
/// Never empty. Otherwise the name is kept exactly as given, spaces and
/// punctuation included.
///
/// ```
/// use vehicle_loader::fleet::Driver;
///
/// assert_eq!(Driver::new("Tom-Tom").unwrap().to_string(), "Tom-Tom");
/// assert!(Driver::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Driver(String);

impl Driver {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidDriver> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidDriver {
                reason: "driver name cannot be empty",
            });
        }
        Ok(Driver(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Driver({})", self.0)
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier taken verbatim from the input record.
///
/// Expected to be unique within one load, though nothing enforces it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(i64);

impl VehicleId {
    pub fn new(id: i64) -> Self {
        VehicleId(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_driver() {
        assert!(Driver::new("Tom-Tom".to_string()).is_ok());
        assert!(Driver::new("N".to_string()).is_ok());
        assert!(Driver::new("Croquignol le Grand".to_string()).is_ok());
    }

    #[test]
    fn reject_empty_driver() {
        let err = Driver::new("".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "invalid driver: driver name cannot be empty");
    }

    #[test]
    fn driver_display_and_debug() {
        let driver = Driver::new("Olga".to_string()).unwrap();
        assert_eq!(format!("{}", driver), "Olga");
        assert_eq!(format!("{:?}", driver), "Driver(Olga)");
    }

    #[test]
    fn vehicle_id_roundtrip() {
        let id = VehicleId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(format!("{:?}", id), "VehicleId(42)");
    }

    #[test]
    fn vehicle_id_ordering() {
        assert!(VehicleId::new(1) < VehicleId::new(2));
        assert_eq!(VehicleId::new(-3), VehicleId::new(-3));
    }
}
