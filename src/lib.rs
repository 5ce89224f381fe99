// Library root
// ------------
// This crate is a small, synchronous client for the Scorebook evaluation
// platform. The binary (`main.rs`) uses it to run the dataset/origin
// walkthrough, but every module here is usable on its own.
//
// Module responsibilities:
// - `config`: process-wide configuration read once at startup from the
//   `SCOREBOOK_*` environment variables.
// - `error`: the typed failure taxonomy every remote call returns.
// - `client`: the blocking HTTP layer (bearer auth, JSON bodies, status
//   checks, debug logging).
// - `api`: typed sub-clients for the REST resources (projects, datasets,
//   experiments).
// - `records`: a lazy, paginated iterator over dataset rows.
// - `origin`: derivation of origin references that link evaluation results
//   back to the dataset row that produced them.
// - `walkthrough`: the demonstration flow and its console output.
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod origin;
pub mod records;
pub mod walkthrough;

pub use config::Config;
pub use error::{Error, Result};
