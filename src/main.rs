// Entrypoint for the walkthrough binary.
// - Keeps `main` small: load config, build the API client, run the flow.
// - The missing-credential case is the one guarded failure: report it once
//   and return without touching the network.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use scorebook::api::Api;
use scorebook::{walkthrough, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return Ok(());
    }

    let api = Api::new(&config)?;
    walkthrough::run(&api, &config)?;
    Ok(())
}
