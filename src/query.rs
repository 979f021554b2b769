//! Query-string composition.
//!
//! [`QueryBuilder`] is the single place URLs get their parameters. It
//! remembers whether a query has been started, so the first parameter is
//! joined with `?` and the rest with `&`, and it percent-encodes every value.
//!
//! The `set_*` helpers take an existing URL or query string and return it
//! with one more parameter. They never validate their input.
//!
//! ```
//! use newsapi_client::query::{set_page_size, set_sorting};
//!
//! let url = set_page_size(25, "https://newsapi.org/v2/everything");
//! assert_eq!(url, "https://newsapi.org/v2/everything?pageSize=25");
//! assert_eq!(
//!     set_sorting(&url, "popularity"),
//!     "https://newsapi.org/v2/everything?pageSize=25&sortBy=popularity"
//! );
//! ```

use std::fmt;

/// Incrementally appends `key=value` pairs to a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    url: String,
    started: bool,
}

impl QueryBuilder {
    /// Start from `base`. A `?` already present in `base` counts as a started
    /// query, so the next parameter is joined with `&`.
    pub fn new(base: impl Into<String>) -> Self {
        let url = base.into();
        let started = url.contains('?');
        Self { url, started }
    }

    /// Append one parameter. The key is written verbatim, the value is
    /// percent-encoded.
    pub fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        if !self.started {
            self.url.push('?');
            self.started = true;
        } else if !self.url.ends_with('?') && !self.url.ends_with('&') {
            self.url.push('&');
        }
        self.url.push_str(key);
        self.url.push('=');
        self.url.push_str(&urlencoding::encode(&value));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn opt_param<V: fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn build(self) -> String {
        self.url
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Append `pageSize=<page_size>`.
pub fn set_page_size(page_size: u32, query: &str) -> String {
    QueryBuilder::new(query).param("pageSize", page_size).build()
}

/// Append `language=<language>`.
pub fn set_language(query: &str, language: &str) -> String {
    QueryBuilder::new(query).param("language", language).build()
}

/// Append `source=<source>`.
pub fn set_sources(query: &str, source: &str) -> String {
    QueryBuilder::new(query).param("source", source).build()
}

/// Append `from=<from>&to=<to>`.
pub fn set_date_range(query: &str, from: &str, to: &str) -> String {
    QueryBuilder::new(query)
        .param("from", from)
        .param("to", to)
        .build()
}

/// Append `sortBy=<sorting>`.
pub fn set_sorting(query: &str, sorting: &str) -> String {
    QueryBuilder::new(query).param("sortBy", sorting).build()
}

/// Append `from=<from>`.
pub fn set_from_date(query: &str, from: &str) -> String {
    QueryBuilder::new(query).param("from", from).build()
}

/// Append `to=<to>`.
pub fn set_to_date(query: &str, to: &str) -> String {
    QueryBuilder::new(query).param("to", to).build()
}

/// Append `domains=<domain>`.
pub fn set_domain(query: &str, domain: &str) -> String {
    QueryBuilder::new(query).param("domains", domain).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_page_size_on_bare_url() {
        assert_eq!(set_page_size(25, "https://x/y"), "https://x/y?pageSize=25");
    }

    #[test]
    fn test_single_setters() {
        let base = "https://x/y";
        assert_eq!(set_language(base, "en"), "https://x/y?language=en");
        assert_eq!(set_sources(base, "cnn"), "https://x/y?source=cnn");
        assert_eq!(set_sorting(base, "publishedAt"), "https://x/y?sortBy=publishedAt");
        assert_eq!(set_from_date(base, "2025-05-06"), "https://x/y?from=2025-05-06");
        assert_eq!(set_to_date(base, "2025-05-07"), "https://x/y?to=2025-05-07");
        assert_eq!(set_domain(base, "bbc.co.uk"), "https://x/y?domains=bbc.co.uk");
    }

    #[test]
    fn test_set_date_range() {
        assert_eq!(
            set_date_range("https://x/y", "2025-05-01", "2025-05-06"),
            "https://x/y?from=2025-05-01&to=2025-05-06"
        );
    }

    #[test]
    fn test_chaining_produces_single_question_mark() {
        let url = set_page_size(10, "https://x/y");
        let url = set_language(&url, "de");
        let url = set_domain(&url, "spiegel.de");
        assert_eq!(url, "https://x/y?pageSize=10&language=de&domains=spiegel.de");
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn test_values_are_percent_encoded() {
        assert_eq!(
            QueryBuilder::new("https://x/y").param("q", "rust & c++").build(),
            "https://x/y?q=rust%20%26%20c%2B%2B"
        );
    }

    #[test]
    fn test_trailing_separator_is_not_doubled() {
        assert_eq!(
            QueryBuilder::new("https://x/y?").param("q", "a").build(),
            "https://x/y?q=a"
        );
        assert_eq!(
            QueryBuilder::new("https://x/y?a=1&").param("b", 2).build(),
            "https://x/y?a=1&b=2"
        );
    }

    #[test]
    fn test_opt_param_skips_none() {
        let url = QueryBuilder::new("https://x/y")
            .opt_param("page", None::<u32>)
            .opt_param("pageSize", Some(20))
            .build();
        assert_eq!(url, "https://x/y?pageSize=20");
    }

    #[test]
    fn test_plain_query_string_input() {
        // A bare query fragment without a scheme is treated like any other string.
        assert_eq!(set_language("", "fr"), "?language=fr");
    }
}
