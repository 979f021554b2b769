//! # newsapi_client
//!
//! An async client for the [newsapi.org](https://newsapi.org) v2 HTTP API.
//!
//! ## Features
//!
//! - One authenticated request path shared by every query method
//! - Typed errors for transport failures, error statuses, bad JSON and
//!   rejected parameters; nothing ever exits the host process
//! - Allow-list validation of language and country before any request is sent
//! - A percent-encoding [`QueryBuilder`] for composing query strings
//! - A pluggable [`Transport`] so the HTTP layer can be swapped or mocked
//!
//! ## Usage
//!
//! ```no_run
//! use newsapi_client::{NewsClient, TopHeadlinesRequest};
//!
//! # async fn run() -> newsapi_client::Result<()> {
//! let client = NewsClient::new("my-api-key").await?;
//!
//! let german = client.search_news_by_language("de").await?;
//!
//! let (request, _) = TopHeadlinesRequest::new()
//!     .change_page_size(10)
//!     .change_country_options("us");
//! let headlines = client.top_headlines(&request).await?;
//! # let _ = (german, headlines);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`client`]: [`NewsClient`] and its query methods
//! - [`query`]: query-string composition and the `set_*` helpers
//! - [`request`]: the [`TopHeadlinesRequest`] parameter aggregate
//! - [`constants`]: endpoint paths and allow-lists
//! - [`models`]: decoded response records
//! - [`transport`]: the HTTP seam and its `reqwest` implementation
//! - [`config`], [`error`], [`logging`]: ambient plumbing

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod request;
pub mod transport;
pub mod utils;

pub use client::{Endpoints, NewsClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{NewsRecord, RecordSource};
pub use query::QueryBuilder;
pub use request::TopHeadlinesRequest;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
