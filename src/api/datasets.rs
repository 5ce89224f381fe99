// Dataset operations: create a dataset, insert records, fetch them back a
// page at a time, and search datasets by name. Records are immutable from
// the client's point of view — this module only inserts and reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::HttpClient;
use crate::error::{Error, Result};
use crate::origin::OriginRef;

/// A dataset resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

/// A single dataset row.
///
/// On insert, only `input` / `expected` (and optionally `metadata` /
/// `tags`) are set. The system fields — `id`, `_xact_id`, `created` — are
/// assigned by the server and come back on fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Arbitrary structured input payload.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub input: Value,

    /// Arbitrary structured expected output.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub expected: Value,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Server-assigned transaction id reflecting write order.
    #[serde(
        default,
        rename = "_xact_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub xact_id: String,

    /// Server-assigned creation timestamp.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created: String,
}

impl Record {
    /// A row holding just an input and its expected output, the shape used
    /// when seeding a dataset.
    pub fn new(input: Value, expected: Value) -> Self {
        Record {
            input,
            expected,
            ..Record::default()
        }
    }

    /// Derive the origin reference linking an evaluation result back to
    /// this row. `None` unless the server populated both `id` and
    /// `_xact_id`.
    pub fn origin(&self, dataset_id: &str) -> Option<OriginRef> {
        OriginRef::for_record(dataset_id, self)
    }
}

/// Parameters for creating a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDataset {
    pub project_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl CreateDataset {
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        CreateDataset {
            project_id: project_id.into(),
            name: name.into(),
            description: String::new(),
            metadata: BTreeMap::new(),
        }
    }
}

/// Request body for the insert endpoint.
#[derive(Debug, Serialize)]
struct InsertBody<'a> {
    events: &'a [Record],
}

/// One page of records from the fetch endpoint.
#[derive(Debug, Deserialize)]
pub struct FetchPage {
    pub events: Vec<Record>,
    #[serde(default)]
    pub cursor: String,
}

/// Filters for searching datasets.
#[derive(Debug, Clone, Default)]
pub struct QueryDatasets {
    pub id: String,
    pub name: String,
    pub version: String,
    pub project_id: String,
    pub project_name: String,
    pub limit: usize,
    pub starting_after: String,
    pub ending_before: String,
}

/// Response from the dataset search endpoint.
#[derive(Debug, Deserialize)]
pub struct DatasetList {
    pub objects: Vec<Dataset>,
}

/// Client for dataset operations.
#[derive(Clone)]
pub struct DatasetsApi {
    client: HttpClient,
}

impl DatasetsApi {
    pub fn new(client: HttpClient) -> Self {
        DatasetsApi { client }
    }

    /// Create a dataset in a project. Not idempotent: creating twice with
    /// the same name yields two datasets.
    pub fn create(&self, params: CreateDataset) -> Result<Dataset> {
        if params.project_id.is_empty() {
            return Err(Error::InvalidParam("project ID"));
        }
        if params.name.is_empty() {
            return Err(Error::InvalidParam("dataset name"));
        }
        self.client.post_json("/v1/dataset", &params)
    }

    /// Insert a batch of records. The response body carries per-row ids,
    /// but callers that need them fetch the rows back instead, so it is
    /// ignored here.
    pub fn insert(&self, dataset_id: &str, records: &[Record]) -> Result<()> {
        if dataset_id.is_empty() {
            return Err(Error::InvalidParam("dataset ID"));
        }
        let body = InsertBody { events: records };
        self.client
            .post(&format!("/v1/dataset/{dataset_id}/insert"), &body)
    }

    /// Fetch one page of records in server-defined order. An empty
    /// `cursor` starts from the beginning. Asking for more rows than exist
    /// returns the rows that do exist, not an error.
    pub fn fetch(&self, dataset_id: &str, limit: usize, cursor: &str) -> Result<FetchPage> {
        if dataset_id.is_empty() {
            return Err(Error::InvalidParam("dataset ID"));
        }
        let mut query: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if !cursor.is_empty() {
            query.push(("cursor", cursor.to_string()));
        }
        self.client
            .get_json(&format!("/v1/dataset/{dataset_id}/fetch"), &query)
    }

    /// Search datasets by name, project, or version.
    pub fn query(&self, params: QueryDatasets) -> Result<DatasetList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if !params.id.is_empty() {
            query.push(("id", params.id));
        }
        if !params.name.is_empty() {
            query.push(("dataset_name", params.name));
        }
        if !params.version.is_empty() {
            query.push(("version", params.version));
        }
        if !params.project_id.is_empty() {
            query.push(("project_id", params.project_id));
        }
        if !params.project_name.is_empty() {
            query.push(("project_name", params.project_name));
        }
        if params.limit > 0 {
            query.push(("limit", params.limit.to_string()));
        }
        if !params.starting_after.is_empty() {
            query.push(("starting_after", params.starting_after));
        }
        if !params.ending_before.is_empty() {
            query.push(("ending_before", params.ending_before));
        }
        self.client.get_json("/v1/dataset", &query)
    }

    /// Delete a dataset by id.
    pub fn delete(&self, dataset_id: &str) -> Result<()> {
        if dataset_id.is_empty() {
            return Err(Error::InvalidParam("dataset ID"));
        }
        self.client.delete(&format!("/v1/dataset/{dataset_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_record_serializes_without_system_fields() {
        let record = Record::new(json!({"text": "hello"}), json!({"response": "Hello"}));
        let wire = serde_json::to_value(&record).unwrap();
        assert_eq!(
            wire,
            json!({"input": {"text": "hello"}, "expected": {"response": "Hello"}})
        );
    }

    #[test]
    fn fetched_record_reads_system_fields() {
        let wire = json!({
            "id": "rec-1",
            "_xact_id": "1000192",
            "created": "2026-08-20T10:00:00Z",
            "input": {"text": "hello"},
            "expected": {"response": "Hello"}
        });
        let record: Record = serde_json::from_value(wire).unwrap();
        assert_eq!(record.id, "rec-1");
        assert_eq!(record.xact_id, "1000192");
        assert_eq!(record.created, "2026-08-20T10:00:00Z");
    }

    #[test]
    fn fetched_record_tolerates_missing_optional_fields() {
        let record: Record = serde_json::from_value(json!({"input": 42})).unwrap();
        assert!(record.id.is_empty());
        assert!(record.xact_id.is_empty());
        assert_eq!(record.input, json!(42));
        assert!(record.expected.is_null());
    }
}
