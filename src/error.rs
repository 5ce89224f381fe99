// Error taxonomy for the crate. Every remote call returns `Result<T>` so
// callers see exactly one of these variants instead of an implicit panic.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a client operation can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid local configuration. Raised before any request
    /// is sent.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required parameter was empty. Caught client-side so the server
    /// never sees a malformed request.
    #[error("{0} is required")]
    InvalidParam(&'static str),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status. Check `is_auth` to
    /// distinguish a rejected token from other failures.
    #[error("unexpected API response: status {status}, body: {body}")]
    Api { status: u16, body: String },

    /// The response arrived but its body was not the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// True when the server rejected the bearer token.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status == 401 || *status == 403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_are_flagged() {
        let unauthorized = Error::Api {
            status: 401,
            body: "bad token".into(),
        };
        assert!(unauthorized.is_auth());
        assert!(unauthorized.to_string().contains("status 401"));

        let server_error = Error::Api {
            status: 500,
            body: "boom".into(),
        };
        assert!(!server_error.is_auth());
        assert!(server_error.to_string().contains("status 500"));
    }

    #[test]
    fn invalid_param_names_the_field() {
        let err = Error::InvalidParam("dataset ID");
        assert_eq!(err.to_string(), "dataset ID is required");
    }
}
