//! Parameter aggregate for top-headline queries.
//!
//! [`TopHeadlinesRequest`] is built by chaining change operations. The
//! validated ones (`change_sort_options`, `change_country_options`,
//! `change_language`, `change_source`) return the request together with a
//! flag; when the value is not on the matching `HEADLINE_*` allow-list the
//! request comes back untouched and the flag is `false`.
//!
//! ```
//! use newsapi_client::TopHeadlinesRequest;
//!
//! let (request, ok) = TopHeadlinesRequest::default()
//!     .change_query("climate")
//!     .change_page_size(20)
//!     .change_country_options("gb");
//! assert!(ok);
//! assert_eq!(request.country.as_deref(), Some("gb"));
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{
    HEADLINE_COUNTRIES, HEADLINE_LANGUAGES, HEADLINE_SORT_OPTIONS, HEADLINE_SOURCES, is_allowed,
};
use crate::query::QueryBuilder;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlinesRequest {
    pub query: Option<String>,
    pub sources: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
}

impl TopHeadlinesRequest {
    /// An empty request; every filter unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `sortBy` to one of `relevancy`, `popularity`, `publishedAt`.
    pub fn change_sort_options(self, sort_by: &str) -> (Self, bool) {
        self.change_checked(HEADLINE_SORT_OPTIONS, sort_by, |r, v| r.sort_by = Some(v))
    }

    /// Set `country` if it is one of the ten [`HEADLINE_COUNTRIES`].
    pub fn change_country_options(self, country: &str) -> (Self, bool) {
        self.change_checked(HEADLINE_COUNTRIES, country, |r, v| r.country = Some(v))
    }

    /// Set `language` if it is one of the five [`HEADLINE_LANGUAGES`].
    pub fn change_language(self, language: &str) -> (Self, bool) {
        self.change_checked(HEADLINE_LANGUAGES, language, |r, v| r.language = Some(v))
    }

    /// Set `sources` if it is one of the seven [`HEADLINE_SOURCES`].
    pub fn change_source(self, source: &str) -> (Self, bool) {
        self.change_checked(HEADLINE_SOURCES, source, |r, v| r.sources = Some(v))
    }

    /// Set the free-text `q` filter. Never fails.
    pub fn change_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the 1-based result page. Never fails.
    pub fn change_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the number of results per page. Never fails.
    pub fn change_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Render the set fields as a query on `base`, in a fixed order.
    pub fn to_url(&self, base: &str) -> String {
        QueryBuilder::new(base)
            .opt_param("q", self.query.as_deref())
            .opt_param("sources", self.sources.as_deref())
            .opt_param("language", self.language.as_deref())
            .opt_param("country", self.country.as_deref())
            .opt_param("sortBy", self.sort_by.as_deref())
            .opt_param("page", self.page)
            .opt_param("pageSize", self.page_size)
            .build()
    }

    fn change_checked(
        mut self,
        allowed: &[&str],
        value: &str,
        apply: impl FnOnce(&mut Self, String),
    ) -> (Self, bool) {
        if !is_allowed(allowed, value) {
            return (self, false);
        }
        apply(&mut self, value.to_string());
        (self, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CLIENT_LANGUAGES;

    #[test]
    fn test_valid_changes_set_fields() {
        let request = TopHeadlinesRequest::new();

        let (request, ok) = request.change_sort_options("publishedAt");
        assert!(ok);
        let (request, ok) = request.change_country_options("mx");
        assert!(ok);
        let (request, ok) = request.change_language("it");
        assert!(ok);
        let (request, ok) = request.change_source("the-guardian-uk");
        assert!(ok);

        assert_eq!(request.sort_by.as_deref(), Some("publishedAt"));
        assert_eq!(request.country.as_deref(), Some("mx"));
        assert_eq!(request.language.as_deref(), Some("it"));
        assert_eq!(request.sources.as_deref(), Some("the-guardian-uk"));
    }

    #[test]
    fn test_every_allowed_value_is_accepted() {
        for sort in HEADLINE_SORT_OPTIONS {
            let (r, ok) = TopHeadlinesRequest::new().change_sort_options(sort);
            assert!(ok, "{sort}");
            assert_eq!(r.sort_by.as_deref(), Some(*sort));
        }
        for country in HEADLINE_COUNTRIES {
            let (r, ok) = TopHeadlinesRequest::new().change_country_options(country);
            assert!(ok, "{country}");
            assert_eq!(r.country.as_deref(), Some(*country));
        }
        for language in HEADLINE_LANGUAGES {
            let (r, ok) = TopHeadlinesRequest::new().change_language(language);
            assert!(ok, "{language}");
            assert_eq!(r.language.as_deref(), Some(*language));
        }
        for source in HEADLINE_SOURCES {
            let (r, ok) = TopHeadlinesRequest::new().change_source(source);
            assert!(ok, "{source}");
            assert_eq!(r.sources.as_deref(), Some(*source));
        }
    }

    #[test]
    fn test_invalid_changes_leave_request_untouched() {
        let before = TopHeadlinesRequest::new()
            .change_query("election")
            .change_page(2)
            .change_language("en")
            .0;

        let (after, ok) = before.clone().change_sort_options("newest");
        assert!(!ok);
        assert_eq!(after, before);

        // "ca" is accepted by the client search but not by headlines.
        let (after, ok) = before.clone().change_country_options("ca");
        assert!(!ok);
        assert_eq!(after, before);

        let (after, ok) = before.clone().change_language("EN");
        assert!(!ok);
        assert_eq!(after, before);

        let (after, ok) = before.clone().change_source("bbc-news");
        assert!(!ok);
        assert_eq!(after, before);
    }

    #[test]
    fn test_headline_languages_narrower_than_client() {
        let rejected: Vec<_> = CLIENT_LANGUAGES
            .iter()
            .filter(|l| !TopHeadlinesRequest::new().change_language(l).1)
            .collect();
        assert_eq!(rejected.len(), CLIENT_LANGUAGES.len() - HEADLINE_LANGUAGES.len());
    }

    #[test]
    fn test_change_is_idempotent() {
        let once = TopHeadlinesRequest::new().change_country_options("de").0;
        let twice = once.clone().change_country_options("de").0;
        assert_eq!(once, twice);

        let once = TopHeadlinesRequest::new().change_page_size(50);
        let twice = once.clone().change_page_size(50);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unconditional_setters() {
        let request = TopHeadlinesRequest::new()
            .change_query("rust")
            .change_page(3)
            .change_page_size(100);
        assert_eq!(request.query.as_deref(), Some("rust"));
        assert_eq!(request.page, Some(3));
        assert_eq!(request.page_size, Some(100));
    }

    #[test]
    fn test_to_url_empty() {
        assert_eq!(TopHeadlinesRequest::new().to_url("https://x/y"), "https://x/y");
    }

    #[test]
    fn test_to_url_orders_and_encodes() {
        let (request, _) = TopHeadlinesRequest::new()
            .change_page_size(10)
            .change_page(2)
            .change_query("ai safety")
            .change_sort_options("popularity");
        let (request, _) = request.change_country_options("us");
        assert_eq!(
            request.to_url("https://newsapi.org/v2/top-headline"),
            "https://newsapi.org/v2/top-headline?q=ai%20safety&country=us&sortBy=popularity&page=2&pageSize=10"
        );
    }
}
