// Typed sub-clients for the Scorebook REST resources. `Api` is the entry
// point: build it once from a `Config`, then take the sub-client you need.
// Sub-clients are cheap clones sharing one connection pool.

pub mod datasets;
pub mod experiments;
pub mod projects;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::Result;

/// Facade over the REST API.
#[derive(Clone, Debug)]
pub struct Api {
    client: HttpClient,
}

impl Api {
    /// Create an API client. Fails if the configuration is incomplete;
    /// no network traffic happens here.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Api {
            client: HttpClient::new(config)?,
        })
    }

    /// Project operations.
    pub fn projects(&self) -> projects::ProjectsApi {
        projects::ProjectsApi::new(self.client.clone())
    }

    /// Dataset operations.
    pub fn datasets(&self) -> datasets::DatasetsApi {
        datasets::DatasetsApi::new(self.client.clone())
    }

    /// Experiment operations.
    pub fn experiments(&self) -> experiments::ExperimentsApi {
        experiments::ExperimentsApi::new(self.client.clone())
    }
}
