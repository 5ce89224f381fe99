// Project operations. Projects are the top-level container: datasets and
// experiments both hang off a project id.

use serde::{Deserialize, Serialize};

use crate::client::HttpClient;
use crate::error::{Error, Result};

/// A project resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub org_id: String,
}

/// Parameters for resolving a project by name.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProject {
    pub name: String,
    /// Organization the project belongs to. Empty means the token's
    /// default organization; the field is omitted from the request then.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub org_name: String,
}

/// Filters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ListProjects {
    pub org_id: String,
    pub limit: usize,
}

/// Response from the project list endpoint.
#[derive(Debug, Deserialize)]
pub struct ProjectList {
    pub objects: Vec<Project>,
}

/// Client for project operations.
#[derive(Clone)]
pub struct ProjectsApi {
    client: HttpClient,
}

impl ProjectsApi {
    pub fn new(client: HttpClient) -> Self {
        ProjectsApi { client }
    }

    /// Create a project, or resolve an existing one with the same name.
    ///
    /// The service treats this endpoint as get-or-create: name plus
    /// organization resolve to at most one project. The client does not
    /// verify that claim — it only uses the returned id.
    pub fn create(&self, params: CreateProject) -> Result<Project> {
        if params.name.is_empty() {
            return Err(Error::InvalidParam("project name"));
        }
        self.client.post_json("/v1/project", &params)
    }

    /// Retrieve a project by id.
    pub fn get(&self, id: &str) -> Result<Project> {
        if id.is_empty() {
            return Err(Error::InvalidParam("project ID"));
        }
        self.client.get_json(&format!("/v1/project/{id}"), &[])
    }

    /// List projects, optionally filtered by organization.
    pub fn list(&self, params: ListProjects) -> Result<ProjectList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if !params.org_id.is_empty() {
            query.push(("org_id", params.org_id));
        }
        if params.limit > 0 {
            query.push(("limit", params.limit.to_string()));
        }
        self.client.get_json("/v1/project", &query)
    }

    /// Delete a project by id.
    pub fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::InvalidParam("project ID"));
        }
        self.client.delete(&format!("/v1/project/{id}"))
    }
}
