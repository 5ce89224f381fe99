// Configuration module: everything the client needs is read once from the
// environment into a plain struct, then passed explicitly to constructors.
// Nothing else in the crate looks at environment variables.

use crate::error::{Error, Result};

/// Default API endpoint when `SCOREBOOK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.scorebook.dev";

/// Default application (web UI) endpoint when `SCOREBOOK_APP_URL` is not set.
pub const DEFAULT_APP_URL: &str = "https://app.scorebook.dev";

/// Immutable configuration for the Scorebook client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token used on every request. Required.
    pub api_key: String,
    /// Base URL of the REST API.
    pub api_url: String,
    /// Base URL of the web application (used in printed links).
    pub app_url: String,
    /// Organization name sent when resolving projects. May be empty, in
    /// which case the server picks the token's default organization.
    pub org_name: String,
    /// Project name resolved when no explicit project is given; the
    /// walkthrough runs against this project.
    pub default_project: String,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// Supported variables:
    ///   - `SCOREBOOK_API_KEY`: API key for authentication (required)
    ///   - `SCOREBOOK_API_URL`: API endpoint (default: api.scorebook.dev)
    ///   - `SCOREBOOK_APP_URL`: app endpoint (default: app.scorebook.dev)
    ///   - `SCOREBOOK_ORG_NAME`: organization name (default: empty)
    ///   - `SCOREBOOK_DEFAULT_PROJECT`: project name to resolve
    ///     (default: "origin-walkthrough")
    pub fn from_env() -> Self {
        Config {
            api_key: env_string("SCOREBOOK_API_KEY", ""),
            api_url: env_string("SCOREBOOK_API_URL", DEFAULT_API_URL),
            app_url: env_string("SCOREBOOK_APP_URL", DEFAULT_APP_URL),
            org_name: env_string("SCOREBOOK_ORG_NAME", ""),
            default_project: env_string("SCOREBOOK_DEFAULT_PROJECT", "origin-walkthrough"),
        }
    }

    /// Check that every required field is present. Called by `Api::new`
    /// before any network traffic happens.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config(
                "SCOREBOOK_API_KEY is not set; an API key is required".into(),
            ));
        }
        if self.api_url.is_empty() {
            return Err(Error::Config("API URL must not be empty".into()));
        }
        Ok(())
    }
}

/// Returns the trimmed environment variable value, or the default when the
/// variable is unset or blank.
fn env_string(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_api_key() {
        let cfg = Config {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.into(),
            app_url: DEFAULT_APP_URL.into(),
            org_name: String::new(),
            default_project: "default-project".into(),
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("SCOREBOOK_API_KEY"));
    }

    #[test]
    fn validate_accepts_complete_config() {
        let cfg = Config {
            api_key: "sk-test".into(),
            api_url: DEFAULT_API_URL.into(),
            app_url: DEFAULT_APP_URL.into(),
            org_name: "acme".into(),
            default_project: "default-project".into(),
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_api_url() {
        let cfg = Config {
            api_key: "sk-test".into(),
            api_url: String::new(),
            app_url: DEFAULT_APP_URL.into(),
            org_name: String::new(),
            default_project: "default-project".into(),
        };
        assert!(cfg.validate().is_err());
    }
}
