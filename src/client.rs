//! The news API client.
//!
//! Every query method funnels into [`NewsClient::execute_query`], which sends
//! one authenticated GET through the client's [`Transport`], maps a non-2xx
//! status to [`Error::RemoteStatus`] and decodes the body as a JSON array of
//! [`NewsRecord`]s.
//!
//! Construction probes the `everything` endpoint once so a bad key is caught
//! up front. A failed probe is returned as [`Error::Construction`].
//!
//! # Example
//!
//! ```no_run
//! use newsapi_client::{ClientConfig, NewsClient};
//!
//! # async fn run() -> newsapi_client::Result<()> {
//! let client = NewsClient::with_config(ClientConfig::new("my-key")).await?;
//! for record in client.search_news_by_query("rust").await? {
//!     println!("{:?}", record.title);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::Local;
use tracing::{debug, error, info, instrument};

use crate::config::ClientConfig;
use crate::constants::{
    CLIENT_COUNTRIES, CLIENT_LANGUAGES, EVERYTHING_PATH, SOURCES_PATH, TOP_HEADLINES_PATH,
    is_allowed,
};
use crate::error::{Error, Result};
use crate::models::{ApiErrorBody, NewsRecord};
use crate::query::QueryBuilder;
use crate::request::TopHeadlinesRequest;
use crate::transport::{ReqwestTransport, Transport};
use crate::utils::{lookback_date, truncate_for_log};

/// Fully resolved endpoint URLs for one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub everything: String,
    pub top_headlines: String,
    pub sources: String,
}

impl Endpoints {
    /// Join the literal endpoint paths onto `config.base_url`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            everything: config.endpoint(EVERYTHING_PATH),
            top_headlines: config.endpoint(TOP_HEADLINES_PATH),
            sources: config.endpoint(SOURCES_PATH),
        }
    }
}

/// Authenticated client for the news API.
///
/// Holds no mutable state after construction, so a shared reference can be
/// used from many tasks at once.
pub struct NewsClient<T = ReqwestTransport> {
    api_key: String,
    endpoints: Endpoints,
    transport: T,
}

impl NewsClient<ReqwestTransport> {
    /// Create a client against the default base URL and probe it with `api_key`.
    pub async fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key)).await
    }

    /// Create a `reqwest`-backed client from `config` and probe it.
    ///
    /// The config is validated by [`with_transport`](NewsClient::with_transport).
    pub async fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(&config).map_err(|e| {
            error!(error = %e, "Failed to build HTTP transport");
            Error::construction(e)
        })?;
        Self::with_transport(config, transport).await
    }
}

impl<T: Transport> NewsClient<T> {
    /// Create a client over a caller-supplied transport and probe it.
    #[instrument(level = "info", skip_all, fields(base_url = %config.base_url))]
    pub async fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate().map_err(|e| {
            error!(error = %e, "Invalid client config");
            Error::construction(e)
        })?;

        let client = Self {
            endpoints: Endpoints::from_config(&config),
            api_key: config.api_key,
            transport,
        };
        client.probe().await.map_err(|e| {
            error!(error = %e, "Probe request failed; client not created");
            Error::construction(e)
        })?;

        info!("News API client ready");
        Ok(client)
    }

    /// One GET against `everything`; only the status matters.
    async fn probe(&self) -> Result<()> {
        let url = &self.endpoints.everything;
        let response = self
            .transport
            .get(url, &self.api_key)
            .await
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
        if !response.is_success() {
            return Err(remote_status_error(url, response.status, &response.body));
        }
        Ok(())
    }

    /// The endpoint URLs resolved from the configured base URL.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send an authenticated GET to `url` and decode the records.
    #[instrument(level = "info", skip(self))]
    pub async fn execute_query(&self, url: &str) -> Result<Vec<NewsRecord>> {
        let response = match self.transport.get(url, &self.api_key).await {
            Ok(response) => response,
            Err(source) => {
                error!(error = %source, "Error sending request");
                return Err(Error::Transport {
                    url: url.to_string(),
                    source,
                });
            }
        };

        if !response.is_success() {
            let err = remote_status_error(url, response.status, &response.body);
            error!(status = response.status, error = %err, "Remote API returned an error status");
            return Err(err);
        }

        match serde_json::from_str::<Vec<NewsRecord>>(&response.body) {
            Ok(records) => {
                debug!(count = records.len(), "Decoded records");
                Ok(records)
            }
            Err(source) => {
                error!(
                    error = %source,
                    body_preview = %truncate_for_log(&response.body, 300),
                    "Error decoding response body"
                );
                Err(Error::Decode {
                    url: url.to_string(),
                    source,
                })
            }
        }
    }

    /// Default feed: the `everything` endpoint with no filters.
    pub async fn get_news(&self) -> Result<Vec<NewsRecord>> {
        self.execute_query(&self.endpoints.everything).await
    }

    /// Unfiltered `top-headline` endpoint.
    pub async fn get_top_headlines(&self) -> Result<Vec<NewsRecord>> {
        self.execute_query(&self.endpoints.top_headlines).await
    }

    /// Unfiltered `everything` endpoint.
    pub async fn get_everything(&self) -> Result<Vec<NewsRecord>> {
        self.execute_query(&self.endpoints.everything).await
    }

    /// Source listing from the `sources` endpoint.
    pub async fn get_sources(&self) -> Result<Vec<NewsRecord>> {
        self.execute_query(&self.endpoints.sources).await
    }

    /// Articles from `source` published since the start of the day one hour
    /// ago (local time). See [`lookback_date`].
    pub async fn get_latest_news_by_source(&self, source: &str) -> Result<Vec<NewsRecord>> {
        let from = lookback_date(Local::now());
        let url = latest_by_source_url(&self.endpoints.everything, source, &from);
        self.execute_query(&url).await
    }

    /// Free-text search on `everything`; the query is percent-encoded.
    pub async fn search_news_by_query(&self, query: &str) -> Result<Vec<NewsRecord>> {
        let url = QueryBuilder::new(self.endpoints.everything.as_str())
            .param("q", query)
            .build();
        self.execute_query(&url).await
    }

    /// Fails with [`Error::Validation`] before any request when `language`
    /// is not in [`CLIENT_LANGUAGES`].
    pub async fn search_news_by_language(&self, language: &str) -> Result<Vec<NewsRecord>> {
        if !is_allowed(CLIENT_LANGUAGES, language) {
            error!(%language, "Rejected language");
            return Err(Error::validation("language", language));
        }
        let url = QueryBuilder::new(self.endpoints.everything.as_str())
            .param("language", language)
            .build();
        self.execute_query(&url).await
    }

    /// Fails with [`Error::Validation`] before any request when `country`
    /// is not in [`CLIENT_COUNTRIES`].
    pub async fn search_news_by_country(&self, country: &str) -> Result<Vec<NewsRecord>> {
        if !is_allowed(CLIENT_COUNTRIES, country) {
            error!(%country, "Rejected country");
            return Err(Error::validation("country", country));
        }
        let url = QueryBuilder::new(self.endpoints.everything.as_str())
            .param("country", country)
            .build();
        self.execute_query(&url).await
    }

    /// Shorthand for [`search_news_by_query`](Self::search_news_by_query).
    pub async fn get_news_by_category(&self, category: &str) -> Result<Vec<NewsRecord>> {
        self.search_news_by_query(category).await
    }

    /// Shorthand for [`search_news_by_language`](Self::search_news_by_language).
    pub async fn get_news_by_language(&self, language: &str) -> Result<Vec<NewsRecord>> {
        self.search_news_by_language(language).await
    }

    /// Shorthand for [`search_news_by_country`](Self::search_news_by_country).
    pub async fn get_news_by_country(&self, country: &str) -> Result<Vec<NewsRecord>> {
        self.search_news_by_country(country).await
    }

    /// Top headlines filtered by every field set on `request`.
    pub async fn top_headlines(&self, request: &TopHeadlinesRequest) -> Result<Vec<NewsRecord>> {
        let url = request.to_url(&self.endpoints.top_headlines);
        self.execute_query(&url).await
    }
}

impl<T> fmt::Debug for NewsClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("api_key", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

fn latest_by_source_url(everything: &str, source: &str, from: &str) -> String {
    QueryBuilder::new(everything)
        .param("sources", source)
        .param("from", from)
        .build()
}

fn remote_status_error(url: &str, status: u16, body: &str) -> Error {
    let body: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    Error::RemoteStatus {
        url: url.to_string(),
        status,
        code: body.code,
        message: body.message,
    }
}
