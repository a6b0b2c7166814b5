//! JSON blob to records.

use super::error::DecodeError;
use super::types::VehicleRecord;

/// Decode a JSON array of vehicle records, preserving input order.
///
/// Fails only if the blob is not well-formed JSON or is not an array of
/// objects. Missing or wrongly-typed fields are not an error here.
pub fn decode(blob: &str) -> Result<Vec<VehicleRecord>, DecodeError> {
    let records: Vec<VehicleRecord> = serde_json::from_str(blob)?;
    tracing::debug!(count = records.len(), "decoded vehicle records");
    Ok(records)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decoding never panics, whatever the input
        #[test]
        fn arbitrary_input_never_panics(s in ".*") {
            let _ = decode(&s);
        }

        /// Decoded ids come back in input order
        #[test]
        fn order_preserved(ids in proptest::collection::vec(any::<i64>(), 0..20)) {
            let body = ids
                .iter()
                .map(|id| format!(r#"{{"type": "velo", "conducteur": "D", "id": {id}}}"#))
                .collect::<Vec<_>>()
                .join(",");
            let records = decode(&format!("[{body}]")).unwrap();
            let decoded: Vec<i64> = records
                .iter()
                .filter_map(|r| r.id.as_ref().and_then(|id| id.as_i64()))
                .collect();
            prop_assert_eq!(decoded, ids);
        }
    }
}
