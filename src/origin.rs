// Origin references: the composite pointer an evaluation run attaches to
// each result so the platform can trace it back to the exact dataset row
// (and row version) that produced it.

use serde::{Deserialize, Serialize};

use crate::api::datasets::Record;

/// A derived pointer from an evaluation result to its source dataset row.
///
/// Never stored by this client — it is computed per record and handed to
/// whatever logs the evaluation span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginRef {
    /// Kind of container the row lives in. Always `"dataset"` here.
    pub object_type: String,
    /// Id of the containing dataset.
    pub object_id: String,
    /// Id of the row itself.
    pub id: String,
    /// Creation timestamp of the row.
    pub created: String,
    /// Transaction id pinning which version of the row was read.
    #[serde(rename = "_xact_id")]
    pub xact_id: String,
}

impl OriginRef {
    /// Derive the origin reference for a fetched record.
    ///
    /// Returns `None` unless the record carries both a row id and a
    /// transaction id — without either, the link would be ambiguous, so no
    /// link is produced at all.
    pub fn for_record(dataset_id: &str, record: &Record) -> Option<OriginRef> {
        if record.id.is_empty() || record.xact_id.is_empty() {
            return None;
        }
        Some(OriginRef {
            object_type: "dataset".to_string(),
            object_id: dataset_id.to_string(),
            id: record.id.clone(),
            created: record.created.clone(),
            xact_id: record.xact_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fetched_record() -> Record {
        serde_json::from_value(json!({
            "id": "rec-7",
            "_xact_id": "1000321",
            "created": "2026-08-20T10:00:00Z",
            "input": {"text": "hello world"},
            "expected": {"response": "Hello World"}
        }))
        .unwrap()
    }

    #[test]
    fn complete_record_yields_full_reference() {
        let origin = OriginRef::for_record("ds-42", &fetched_record()).unwrap();
        assert_eq!(
            origin,
            OriginRef {
                object_type: "dataset".into(),
                object_id: "ds-42".into(),
                id: "rec-7".into(),
                created: "2026-08-20T10:00:00Z".into(),
                xact_id: "1000321".into(),
            }
        );
    }

    #[test]
    fn missing_row_id_yields_none() {
        let mut record = fetched_record();
        record.id.clear();
        assert!(OriginRef::for_record("ds-42", &record).is_none());
    }

    #[test]
    fn missing_xact_id_yields_none() {
        let mut record = fetched_record();
        record.xact_id.clear();
        assert!(OriginRef::for_record("ds-42", &record).is_none());
    }

    #[test]
    fn wire_spelling_uses_underscore_prefix() {
        let origin = OriginRef::for_record("ds-42", &fetched_record()).unwrap();
        let wire = serde_json::to_value(&origin).unwrap();
        assert_eq!(
            wire,
            json!({
                "object_type": "dataset",
                "object_id": "ds-42",
                "id": "rec-7",
                "created": "2026-08-20T10:00:00Z",
                "_xact_id": "1000321"
            })
        );
    }

    #[test]
    fn missing_created_is_allowed() {
        // A record can legitimately lack a timestamp; only id and _xact_id
        // gate the link.
        let mut record = fetched_record();
        record.created.clear();
        let origin = OriginRef::for_record("ds-42", &record).unwrap();
        assert!(origin.created.is_empty());
    }
}
