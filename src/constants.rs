//! Endpoint paths and the fixed allow-lists used to validate parameters.
//!
//! Two families of allow-lists exist. The `CLIENT_*` lists gate the
//! single-parameter search methods on [`NewsClient`](crate::NewsClient); the
//! `HEADLINE_*` lists gate the change operations on
//! [`TopHeadlinesRequest`](crate::TopHeadlinesRequest) and are narrower. The
//! two are kept separate on purpose; see DESIGN.md.

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Default API root. Paths below are joined onto it verbatim.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Endpoint paths, relative to the base URL.
pub const EVERYTHING_PATH: &str = "everything";
/// Singular on purpose: this is the route the client has always called.
pub const TOP_HEADLINES_PATH: &str = "top-headline";
pub const SOURCES_PATH: &str = "sources";

/// Languages accepted by
/// [`NewsClient::search_news_by_language`](crate::NewsClient::search_news_by_language).
pub const CLIENT_LANGUAGES: &[&str] = &[
    "ar", "de", "en", "es", "fr", "he", "it", "nl", "no", "pt", "ru", "sv", "ud", "zh",
];

/// Countries accepted by
/// [`NewsClient::search_news_by_country`](crate::NewsClient::search_news_by_country).
pub const CLIENT_COUNTRIES: &[&str] = &[
    "us", "ca", "gb", "de", "fr", "it", "es", "ar", "cl", "co", "mx",
];

/// Values accepted for `sortBy` on headline requests.
pub const RELEVANCY_SORT: &str = "relevancy";
pub const POPULARITY_SORT: &str = "popularity";
pub const PUBLISHED_AT_SORT: &str = "publishedAt";

pub const HEADLINE_SORT_OPTIONS: &[&str] = &[RELEVANCY_SORT, POPULARITY_SORT, PUBLISHED_AT_SORT];

pub const HEADLINE_COUNTRIES: &[&str] = &[
    "us", "gb", "de", "fr", "it", "es", "ar", "cl", "co", "mx",
];

pub const HEADLINE_LANGUAGES: &[&str] = &["en", "de", "fr", "it", "es"];

/// Source ids accepted for `sources` on headline requests.
pub const CNN_SOURCE: &str = "cnn";
pub const ABC_NEWS_SOURCE: &str = "abc-news";
pub const NEW_YORK_TIMES_SOURCE: &str = "the-new-york-times";
pub const WASHINGTON_POST_SOURCE: &str = "the-washington-post";
pub const REUTERS_SOURCE: &str = "reuters";
pub const GUARDIAN_SOURCE: &str = "the-guardian-uk";
pub const NBC_NEWS_SOURCE: &str = "nbc-news";

pub const HEADLINE_SOURCES: &[&str] = &[
    CNN_SOURCE,
    ABC_NEWS_SOURCE,
    NEW_YORK_TIMES_SOURCE,
    WASHINGTON_POST_SOURCE,
    REUTERS_SOURCE,
    GUARDIAN_SOURCE,
    NBC_NEWS_SOURCE,
];

/// Exact, case-sensitive membership test against an allow-list.
pub fn is_allowed(list: &[&str], value: &str) -> bool {
    list.iter().any(|allowed| *allowed == value)
}
