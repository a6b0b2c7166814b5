//! Vehicle loader.
//!
//! Decodes a JSON list of vehicle records, builds a typed vehicle for each
//! one, and boards its passengers without ever exceeding the vehicle's
//! capacity.

pub mod error;
pub mod fleet;
pub mod records;

pub use error::Error;

use fleet::Vehicle;

/// Decode a JSON blob and build its vehicles, in input order.
///
/// Fails on the first decode or load error; nothing is returned in that case.
pub fn load_str(blob: &str) -> Result<Vec<Vehicle>, Error> {
    let records = records::decode(blob)?;
    Ok(fleet::load(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{LoadError, VehicleId, VehicleKind};

    const SAMPLE: &str = include_str!("../data/vehicles.json");

    #[test]
    fn load_embedded_sample() {
        let vehicles = load_str(SAMPLE).unwrap();
        assert_eq!(vehicles.len(), 4);

        let summary: Vec<_> = vehicles
            .iter()
            .map(|v| (v.kind(), v.id(), v.driver().as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (VehicleKind::Bike, VehicleId::new(1), "Tom-Tom"),
                (VehicleKind::Bike, VehicleId::new(2), "Nana"),
                (VehicleKind::QuadCycle, VehicleId::new(3), "Croquignol"),
                (VehicleKind::Tandem, VehicleId::new(4), "Olga"),
            ]
        );

        assert!(vehicles[0].passengers().is_empty());
        assert!(vehicles[1].passengers().is_empty());
        assert_eq!(vehicles[2].passengers(), ["Filochard", "Ribouldingue"]);
        assert_eq!(vehicles[3].passengers(), ["Bronsky"]);
    }

    #[test]
    fn render_embedded_sample() {
        let lines: Vec<String> = load_str(SAMPLE)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            vec![
                "<Bike 1 driven by Tom-Tom>",
                "<Bike 2 driven by Nana>",
                "<QuadCycle 3 driven by Croquignol, with: [Filochard, Ribouldingue]>",
                "<Tandem 4 driven by Olga, with: [Bronsky]>",
            ]
        );
    }

    #[test]
    fn decode_error_surfaces() {
        assert!(matches!(load_str("[{"), Err(Error::Decode(_))));
    }

    #[test]
    fn bike_with_malformed_passengers_loads() {
        for blob in [
            r#"[{"type": "velo", "conducteur": "Nana", "id": 2, "passagers": "Olga"}]"#,
            r#"[{"type": "velo", "conducteur": "Nana", "id": 2, "passagers": [1, 2]}]"#,
        ] {
            let vehicles = load_str(blob).unwrap();
            assert_eq!(vehicles.len(), 1);
            assert_eq!(vehicles[0].kind(), VehicleKind::Bike);
            assert!(vehicles[0].passengers().is_empty());
        }
    }

    #[test]
    fn wrongly_typed_id_is_a_load_error() {
        let err = load_str(r#"[{"type": "velo", "conducteur": "Nana", "id": "2"}]"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Load(LoadError::InvalidField { field: "id", .. })
        ));
    }

    #[test]
    fn only_french_keys_are_read() {
        let blob = r#"[{"type": "velo", "driver": "Nana", "conducteur": "Tom-Tom", "id": 2}]"#;
        let vehicles = load_str(blob).unwrap();
        assert_eq!(vehicles[0].driver().as_str(), "Tom-Tom");

        let err = load_str(r#"[{"type": "velo", "driver": "Nana", "id": 2}]"#).unwrap_err();
        assert_eq!(
            err,
            Error::Load(LoadError::MissingField {
                index: 0,
                field: "conducteur",
            })
        );
    }

    #[test]
    fn load_error_surfaces() {
        let err = load_str(r#"[{"type": "trottinette", "conducteur": "Nana", "id": 2}]"#)
            .unwrap_err();
        assert_eq!(
            err,
            Error::Load(LoadError::UnsupportedType {
                index: 0,
                kind: "trottinette".to_string(),
            })
        );
    }
}
