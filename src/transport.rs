//! HTTP transport abstraction.
//!
//! [`NewsClient`](crate::NewsClient) talks to the network only through the
//! [`Transport`] trait, so any HTTP library (or a test double) can sit
//! underneath it. The default implementation, [`ReqwestTransport`], wraps a
//! shared `reqwest::Client`.
//!
//! A transport reports what the server said and nothing more: status handling
//! and body decoding live in the client.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::constants::API_KEY_HEADER;
use crate::error::{BoxError, Error, Result};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Pair a status code with its body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal async GET used by the client.
///
/// Implementations must send `api_key` in the `X-Api-Key` header and return
/// an error only when no HTTP response was obtained (DNS, TLS, connection
/// reset, timeout). A non-2xx response is still `Ok`.
///
/// ```ignore
/// struct Canned;
///
/// impl Transport for Canned {
///     async fn get(&self, _url: &str, _api_key: &str) -> Result<HttpResponse, BoxError> {
///         Ok(HttpResponse::new(200, "[]"))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// GET `url` with `api_key` attached and return whatever the server sent.
    fn get(
        &self,
        url: &str,
        api_key: &str,
    ) -> impl Future<Output = std::result::Result<HttpResponse, BoxError>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the timeout and user agent from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_timeout(Duration::from_secs(config.timeout_secs), &config.user_agent)
    }

    /// Build a transport whose requests time out after `timeout` and send
    /// `user_agent`. Fails only if the TLS backend cannot be initialised.
    pub fn with_timeout(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.to_string())
            .build()
            .map_err(|e| Error::Transport {
                url: String::new(),
                source: Box::new(e),
            })?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn get(&self, url: &str, api_key: &str) -> std::result::Result<HttpResponse, BoxError> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "Received response");
        Ok(HttpResponse { status, body })
    }
}
