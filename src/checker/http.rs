// src/checker/http.rs
// =============================================================================
// This module checks if a single URL is reachable by making an HTTP request.
//
// Key functionality:
// - Makes exactly one HTTP GET request per check
// - Only a 200 OK counts as success (other 2xx, 3xx, 4xx, 5xx all fail)
// - Rejects non-http(s) schemes before touching the network
// - Relies on reqwest's default redirect policy (follows up to 10 hops)
//
// The checker keeps no state besides the reqwest Client, which is itself
// safe to share. Many tasks can call check() on the same HttpChecker at once.
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::{Check, CheckError};

/// Checks URLs with a real HTTP GET.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted
/// and shares its connection pool between clones.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: Client,
}

impl HttpChecker {
    /// Creates a checker with reqwest's default transport settings:
    /// no request timeout, no retries, automatic redirects.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    /// Uses a caller-supplied client (custom TLS roots, proxies, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Check for HttpChecker {
    async fn check(&self, url: &str) -> Result<(), CheckError> {
        let target = parse_target(url)?;

        let response = self.client.get(target).send().await?;
        let status = response.status();

        // Dropping the response releases the body and hands the connection
        // back to the pool (or closes it) before we look at the status.
        drop(response);

        debug!(url, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            return Err(CheckError::UnexpectedStatus(status.as_u16()));
        }

        Ok(())
    }
}

// Parses the raw input string and makes sure it is something we can GET.
//
// Returns a Transport error (never panics) for:
//   - empty strings and other unparseable input
//   - schemes other than http/https, e.g. "htp://example.com"
fn parse_target(url: &str) -> Result<Url, CheckError> {
    let parsed = Url::parse(url)
        .map_err(|e| CheckError::Transport(format!("Get {:?}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CheckError::Transport(format!(
            "Get {:?}: unsupported protocol scheme {:?}",
            url, other
        ))),
    }
}
