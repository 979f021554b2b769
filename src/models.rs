//! Data models decoded from the news API.
//!
//! - [`NewsRecord`]: one element of a response array (an article or a source)
//! - [`RecordSource`]: the `source` object nested inside an article
//! - [`ApiErrorBody`]: the error object the service returns with non-2xx responses
//!
//! The service does not guarantee a fixed shape, so every known field is
//! optional and anything unrecognised (or mistyped) is kept in
//! [`NewsRecord::extra`].

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single article or source entry.
///
/// Field names follow the service's camelCase keys on the wire. Decoding
/// accepts any JSON object: a known key whose value has an unexpected type
/// is left in [`extra`](Self::extra) instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRecord {
    /// Source identifier (source listings only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source display name (source listings only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    /// Publication timestamp as sent by the service (RFC 3339 in practice).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RecordSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Every other key the service sent, plus known keys whose value did not
    /// fit the typed field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for NewsRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra = Map::deserialize(deserializer)?;
        Ok(NewsRecord {
            id: take_typed(&mut extra, "id"),
            name: take_typed(&mut extra, "name"),
            title: take_typed(&mut extra, "title"),
            description: take_typed(&mut extra, "description"),
            url: take_typed(&mut extra, "url"),
            author: take_typed(&mut extra, "author"),
            url_to_image: take_typed(&mut extra, "urlToImage"),
            published_at: take_typed(&mut extra, "publishedAt"),
            content: take_typed(&mut extra, "content"),
            source: take_typed(&mut extra, "source"),
            category: take_typed(&mut extra, "category"),
            language: take_typed(&mut extra, "language"),
            country: take_typed(&mut extra, "country"),
            extra,
        })
    }
}

/// Move `key` out of `map` if its value decodes as `T`; otherwise leave it.
/// `null` decodes to `None` and is dropped.
fn take_typed<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = map.get(key)?;
    if value.is_null() {
        map.remove(key);
        return None;
    }
    let typed = serde_json::from_value(value.clone()).ok()?;
    map.remove(key);
    Some(typed)
}

impl NewsRecord {
    /// Parse [`published_at`](Self::published_at) as an RFC 3339 timestamp.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        self.published_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
    }

    /// Best human-readable label: the title for articles, the name for sources.
    pub fn label(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

/// The `{"id": ..., "name": ...}` object attached to an article.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecordSource {
    /// Source slug, e.g. `reuters`; `null` for unlisted sources.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Error payload returned alongside non-2xx statuses, e.g.
/// `{"status":"error","code":"apiKeyInvalid","message":"..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    /// Machine-readable reason, e.g. `apiKeyInvalid` or `rateLimited`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_record_from_title_only() {
        let records: Vec<NewsRecord> =
            serde_json::from_str(r#"[{"title":"A"},{"title":"B"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title.as_deref(), Some("A"));
        assert_eq!(records[1].title.as_deref(), Some("B"));
        assert!(records[0].extra.is_empty());
    }

    #[test]
    fn test_article_deserialization() {
        let json = r#"{
            "source": {"id": "reuters", "name": "Reuters"},
            "author": "Jane Roe",
            "title": "Markets rally",
            "description": "Stocks up",
            "url": "https://reuters.com/a",
            "urlToImage": "https://reuters.com/a.jpg",
            "publishedAt": "2025-05-06T14:30:00Z",
            "content": "Body"
        }"#;
        let record: NewsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.author.as_deref(), Some("Jane Roe"));
        assert_eq!(record.url_to_image.as_deref(), Some("https://reuters.com/a.jpg"));
        let source = record.source.as_ref().unwrap();
        assert_eq!(source.id.as_deref(), Some("reuters"));
        assert_eq!(source.name.as_deref(), Some("Reuters"));

        let published = record.published_at().unwrap();
        assert_eq!(published.year(), 2025);
        assert_eq!(published.hour(), 14);
    }

    #[test]
    fn test_mistyped_known_field_kept_in_extra() {
        let records: Vec<NewsRecord> =
            serde_json::from_str(r#"[{"title":"A","id":42}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("A"));
        assert!(records[0].id.is_none());
        assert_eq!(records[0].extra.get("id"), Some(&Value::from(42)));
    }

    #[test]
    fn test_mistyped_source_and_nulls() {
        let record: NewsRecord = serde_json::from_str(
            r#"{"source":"cnn","author":null,"title":["x"],"url":"https://a"}"#,
        )
        .unwrap();
        assert!(record.source.is_none());
        assert_eq!(record.extra.get("source"), Some(&Value::from("cnn")));
        assert!(record.author.is_none());
        assert!(!record.extra.contains_key("author"));
        assert!(record.title.is_none());
        assert!(record.extra.contains_key("title"));
        assert_eq!(record.url.as_deref(), Some("https://a"));

        // Re-serializing keeps the mistyped values under their original keys.
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["source"], "cnn");
        assert_eq!(back["title"][0], "x");
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        assert!(serde_json::from_str::<Vec<NewsRecord>>(r#"[{"title":"A"}, 3]"#).is_err());
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let record: NewsRecord =
            serde_json::from_str(r#"{"title":"A","score":7,"tags":["x"]}"#).unwrap();
        assert_eq!(record.extra.get("score"), Some(&Value::from(7)));
        assert!(record.extra.contains_key("tags"));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["score"], 7);
        assert_eq!(back["title"], "A");
    }

    #[test]
    fn test_source_listing_label() {
        let record: NewsRecord = serde_json::from_str(
            r#"{"id":"cnn","name":"CNN","category":"general","language":"en","country":"us"}"#,
        )
        .unwrap();
        assert_eq!(record.label(), Some("CNN"));
        assert_eq!(record.country.as_deref(), Some("us"));
    }

    #[test]
    fn test_bad_timestamp_yields_none() {
        let record = NewsRecord {
            published_at: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(record.published_at().is_none());
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"status":"error","code":"rateLimited","message":"Too many requests"}"#,
        )
        .unwrap();
        assert_eq!(body.code.as_deref(), Some("rateLimited"));
        assert_eq!(body.message.as_deref(), Some("Too many requests"));
    }
}
