//! Error taxonomy for the news API client.
//!
//! Every public operation returns [`Result<T>`]. The variants keep the failure
//! kinds apart so callers can tell a bad parameter from a network outage from
//! a rejected key without string matching.

use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::transport::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // Request execution
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("{url} returned HTTP {status}{}", describe_remote(.code, .message))]
    RemoteStatus {
        url: String,
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    // Validation
    #[error("invalid {parameter}: {value:?}")]
    Validation {
        parameter: &'static str,
        value: String,
    },

    // Client creation
    #[error("client construction failed: {0}")]
    Construction(#[source] Box<Error>),
    #[error("API key must not be empty")]
    MissingApiKey,
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("config: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn validation(parameter: &'static str, value: &str) -> Self {
        Error::Validation {
            parameter,
            value: value.to_string(),
        }
    }

    pub(crate) fn construction(cause: Error) -> Self {
        Error::Construction(Box::new(cause))
    }

    /// HTTP status of a [`Error::RemoteStatus`], looking through
    /// [`Error::Construction`] so a failed probe reports the same way.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RemoteStatus { status, .. } => Some(*status),
            Error::Construction(inner) => inner.status(),
            _ => None,
        }
    }
}

fn describe_remote(code: &Option<String>, message: &Option<String>) -> String {
    match (code, message) {
        (Some(code), Some(message)) => format!(" ({code}): {message}"),
        (None, Some(message)) => format!(": {message}"),
        (Some(code), None) => format!(" ({code})"),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_status_display_with_api_error() {
        let err = Error::RemoteStatus {
            url: "https://newsapi.org/v2/everything".to_string(),
            status: 401,
            code: Some("apiKeyInvalid".to_string()),
            message: Some("Your API key is invalid".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "https://newsapi.org/v2/everything returned HTTP 401 (apiKeyInvalid): Your API key is invalid"
        );
    }

    #[test]
    fn test_remote_status_display_bare() {
        let err = Error::RemoteStatus {
            url: "https://x/y".to_string(),
            status: 500,
            code: None,
            message: None,
        };
        assert_eq!(err.to_string(), "https://x/y returned HTTP 500");
    }

    #[test]
    fn test_validation_display() {
        let err = Error::validation("language", "xx");
        assert_eq!(err.to_string(), "invalid language: \"xx\"");
    }

    #[test]
    fn test_status_looks_through_construction() {
        let err = Error::construction(Error::RemoteStatus {
            url: "https://x/y".to_string(),
            status: 401,
            code: None,
            message: None,
        });
        assert_eq!(err.status(), Some(401));
        assert_eq!(Error::MissingApiKey.status(), None);
    }
}
