// HTTP layer: a small blocking client that talks to the Scorebook REST
// API. It is intentionally synchronous — every call in the walkthrough
// depends on the previous call's response, so there is nothing to overlap.

use std::time::{Duration, Instant};

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client holding the base URL and the bearer token.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl HttpClient {
    /// Build a client from validated configuration. The bearer header is
    /// built here, once, so a key that cannot be sent in an HTTP header
    /// fails construction instead of going out as an unauthenticated
    /// request.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| {
                Error::Config(
                    "API key contains characters that cannot be sent in an HTTP header".into(),
                )
            })?;
        auth_header.set_sensitive(true);
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Network)?;
        Ok(HttpClient {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// GET a path with query parameters and decode the JSON response.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.get(&url).query(query);
        let res = self.execute(req, "GET", &url)?;
        decode_json(res)
    }

    /// POST a JSON body and decode the JSON response.
    pub fn post_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T> {
        let res = self.post_raw(path, body)?;
        decode_json(res)
    }

    /// POST a JSON body, ignoring whatever the server sends back. Used for
    /// endpoints like record insertion where only the status matters.
    pub fn post(&self, path: &str, body: &impl Serialize) -> Result<()> {
        self.post_raw(path, body)?;
        Ok(())
    }

    /// DELETE a path, ignoring the response body.
    pub fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.delete(&url);
        self.execute(req, "DELETE", &url)?;
        Ok(())
    }

    fn post_raw(&self, path: &str, body: &impl Serialize) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.post(&url).json(body);
        self.execute(req, "POST", &url)
    }

    /// The Authorization header attached to every request.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Send the request with auth attached, then map transport failures and
    /// non-2xx statuses into the error taxonomy, logging the outcome.
    fn execute(&self, req: RequestBuilder, method: &str, url: &str) -> Result<Response> {
        let start = Instant::now();
        tracing::debug!(method, url, "http request");

        let res = match req.headers(self.auth_headers()).send() {
            Ok(res) => res,
            Err(e) => {
                tracing::debug!(
                    method,
                    url,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "http request failed"
                );
                return Err(Error::Network(e));
            }
        };

        let status = res.status();
        tracing::debug!(
            method,
            url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "http response"
        );

        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            tracing::debug!(
                method,
                url,
                status = status.as_u16(),
                body = %body,
                "http error response"
            );
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(res)
    }
}

/// Read the full body and decode it, so a malformed payload surfaces as
/// `Error::Decode` with the serde message rather than a transport error.
fn decode_json<T: DeserializeOwned>(res: Response) -> Result<T> {
    let bytes = res.bytes().map_err(Error::Network)?;
    serde_json::from_slice(&bytes).map_err(Error::Decode)
}
