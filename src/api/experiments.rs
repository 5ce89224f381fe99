// Experiment operations. An experiment is where an evaluation run stores
// its results; linking one to a dataset is what makes origin references
// resolvable in the UI.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::HttpClient;
use crate::error::{Error, Result};

/// An experiment resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dataset_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

/// Parameters for creating an experiment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateExperiment {
    pub project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Dataset the experiment reads its cases from, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_version: String,
    /// When true, always create a fresh experiment instead of returning an
    /// existing one with the same name.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ensure_new: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

/// Optional parameters for `register`.
#[derive(Debug, Clone, Default)]
pub struct RegisterOpts {
    /// Reuse an existing experiment with the same name instead of forcing
    /// a new one.
    pub update: bool,
    pub dataset_id: String,
    pub dataset_version: String,
    pub tags: Vec<String>,
    pub metadata: BTreeMap<String, Value>,
}

/// Filters for listing experiments.
#[derive(Debug, Clone, Default)]
pub struct ListExperiments {
    pub project_id: String,
    pub project_name: String,
    pub experiment_name: String,
    pub org_name: String,
    pub limit: usize,
}

/// Response from the experiment list endpoint.
#[derive(Debug, Deserialize)]
pub struct ExperimentList {
    pub objects: Vec<Experiment>,
}

/// Client for experiment operations.
#[derive(Clone)]
pub struct ExperimentsApi {
    client: HttpClient,
}

impl ExperimentsApi {
    pub fn new(client: HttpClient) -> Self {
        ExperimentsApi { client }
    }

    /// Create an experiment. Unless `ensure_new` is set, an existing
    /// experiment with the same name in the project is returned unmodified.
    pub fn create(&self, params: CreateExperiment) -> Result<Experiment> {
        if params.project_id.is_empty() {
            return Err(Error::InvalidParam("project ID"));
        }
        self.client.post_json("/v1/experiment", &params)
    }

    /// Get-or-create an experiment by name within a project.
    pub fn register(&self, name: &str, project_id: &str, opts: RegisterOpts) -> Result<Experiment> {
        if name.is_empty() {
            return Err(Error::InvalidParam("experiment name"));
        }
        if project_id.is_empty() {
            return Err(Error::InvalidParam("project ID"));
        }
        self.create(CreateExperiment {
            project_id: project_id.to_string(),
            name: name.to_string(),
            ensure_new: !opts.update,
            dataset_id: opts.dataset_id,
            dataset_version: opts.dataset_version,
            tags: opts.tags,
            metadata: opts.metadata,
            ..CreateExperiment::default()
        })
    }

    /// Retrieve an experiment by id.
    pub fn get(&self, id: &str) -> Result<Experiment> {
        if id.is_empty() {
            return Err(Error::InvalidParam("experiment ID"));
        }
        self.client.get_json(&format!("/v1/experiment/{id}"), &[])
    }

    /// List experiments with optional filters.
    pub fn list(&self, params: ListExperiments) -> Result<ExperimentList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if !params.project_id.is_empty() {
            query.push(("project_id", params.project_id));
        }
        if !params.project_name.is_empty() {
            query.push(("project_name", params.project_name));
        }
        if !params.experiment_name.is_empty() {
            query.push(("experiment_name", params.experiment_name));
        }
        if !params.org_name.is_empty() {
            query.push(("org_name", params.org_name));
        }
        if params.limit > 0 {
            query.push(("limit", params.limit.to_string()));
        }
        self.client.get_json("/v1/experiment", &query)
    }
}
