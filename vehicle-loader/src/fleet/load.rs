//! Vehicle factory: decoded records to typed vehicles.

use tracing::{debug, warn};

use serde_json::Value;

use crate::records::VehicleRecord;

use super::driver::{Driver, VehicleId};
use super::error::LoadError;
use super::kind::VehicleKind;
use super::vehicle::Vehicle;

/// Build one vehicle per record, in input order.
///
/// The load is all-or-nothing: the first record that fails aborts the whole
/// batch and no vehicles are returned.
///
/// # Examples
///
/// ```
/// use vehicle_loader::fleet::{load, VehicleKind};
/// use vehicle_loader::records::decode;
///
/// let records = decode(r#"[{"type": "tandem", "conducteur": "Olga", "id": 4, "passagers": ["Bronsky"]}]"#).unwrap();
/// let vehicles = load(&records).unwrap();
/// assert_eq!(vehicles[0].kind(), VehicleKind::Tandem);
/// assert_eq!(vehicles[0].passengers(), vec!["Bronsky".to_string()]);
/// ```
pub fn load(records: &[VehicleRecord]) -> Result<Vec<Vehicle>, LoadError> {
    let mut vehicles = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let vehicle = build_vehicle(index, record)?;
        debug!(
            index,
            kind = %vehicle.kind(),
            id = %vehicle.id(),
            passengers = vehicle.passengers().len(),
            "built vehicle"
        );
        vehicles.push(vehicle);
    }

    Ok(vehicles)
}

/// Build a single vehicle and board its passengers.
fn build_vehicle(index: usize, record: &VehicleRecord) -> Result<Vehicle, LoadError> {
    let tag = required(index, "type", record.kind.as_ref())?;
    let tag = tag.as_str().ok_or(LoadError::InvalidField {
        index,
        field: "type",
        expected: "a string",
    })?;
    let kind = VehicleKind::from_tag(tag).ok_or_else(|| LoadError::UnsupportedType {
        index,
        kind: tag.to_string(),
    })?;

    let id = required(index, "id", record.id.as_ref())?
        .as_i64()
        .map(VehicleId::new)
        .ok_or(LoadError::InvalidField {
            index,
            field: "id",
            expected: "an integer",
        })?;

    let driver = required(index, "conducteur", record.conducteur.as_ref())?
        .as_str()
        .ok_or(LoadError::InvalidField {
            index,
            field: "conducteur",
            expected: "a string",
        })?;
    let driver = Driver::new(driver).map_err(|source| LoadError::InvalidDriver { index, source })?;

    let mut vehicle = Vehicle::new(kind, id, driver);

    if !kind.carries_passengers() {
        if record.passagers.is_some() {
            warn!(index, %kind, "ignoring passengers on a vehicle that carries none");
        }
        return Ok(vehicle);
    }

    for name in passenger_names(index, record.passagers.as_ref())? {
        vehicle
            .add_passenger(name)
            .map_err(|source| LoadError::CapacityExceeded {
                index,
                kind,
                source,
            })?;
    }

    Ok(vehicle)
}

fn required<'a>(
    index: usize,
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a Value, LoadError> {
    value.ok_or(LoadError::MissingField { index, field })
}

/// Read `passagers` as a list of names. Absent means nobody.
fn passenger_names(index: usize, value: Option<&Value>) -> Result<Vec<&str>, LoadError> {
    let invalid = LoadError::InvalidField {
        index,
        field: "passagers",
        expected: "an array of strings",
    };

    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let Value::Array(entries) = value else {
        return Err(invalid);
    };
    entries
        .iter()
        .map(|entry| entry.as_str())
        .collect::<Option<Vec<_>>>()
        .ok_or(invalid)
}
