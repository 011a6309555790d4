//! Remote edition lookup seam
//!
//! Editions published after the 2015 cutover are addressed by an opaque
//! token that only a year-scoped JSON index knows about. This module holds
//! the index payload model, the pure functions that read it, and the
//! [`EditionLookup`] trait the shell implements over HTTP.
//!
//! The year being looked up always travels as an explicit [`LookupKey`]
//! argument, so concurrent lookups for different years never share state.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::template::fill;

/// Default year-scoped index URL template (`{0}` = four-digit year).
pub const DEFAULT_INDEX_URL: &str =
    "https://jingking.github.io/The-Economist-Audio-List/searchEditions{0}.json";

/// Key identifying which year's index to consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub year: i32,
}

impl LookupKey {
    pub fn for_year(year: i32) -> Self {
        Self { year }
    }

    /// Concrete index URL for this key.
    pub fn endpoint(&self, index_url_template: &str) -> String {
        fill(index_url_template, &[self.year.to_string().as_str()])
    }
}

/// One edition listed in the remote index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEdition {
    #[serde(rename = "issueDate")]
    pub issue_date: String,
    #[serde(rename = "tegId")]
    pub teg_id: String,
}

impl RemoteEdition {
    /// Calendar date of the edition, read from the `YYYY-MM-DD` prefix of `issueDate`.
    pub fn date(&self) -> Option<NaiveDate> {
        let prefix = self.issue_date.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

/// Failure to obtain or read a remote index
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed edition index: {0}")]
    Malformed(String),
}

#[derive(Debug, Default, Deserialize)]
struct IndexPayload {
    #[serde(default)]
    data: Option<IndexData>,
}

#[derive(Debug, Default, Deserialize)]
struct IndexData {
    #[serde(default, rename = "searchEditions")]
    search_editions: Option<SearchEditions>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchEditions {
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct Edge {
    #[serde(default)]
    node: Option<RemoteEdition>,
}

/// Parse a `searchEditions` index document.
///
/// Missing levels (`data`, `searchEditions`, `edges`, `node`) are treated
/// as an empty list; a document that is not valid JSON of that shape is
/// [`LookupError::Malformed`].
pub fn parse_search_editions(body: &str) -> Result<Vec<RemoteEdition>, LookupError> {
    let payload: IndexPayload =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    Ok(payload
        .data
        .and_then(|data| data.search_editions)
        .map(|search| search.edges.into_iter().filter_map(|edge| edge.node).collect())
        .unwrap_or_default())
}

/// Find the edition whose `issueDate` starts with the ISO form of `date`.
pub fn find_by_date(editions: &[RemoteEdition], date: NaiveDate) -> Option<&RemoteEdition> {
    let iso = date.format("%Y-%m-%d").to_string();
    editions
        .iter()
        .find(|edition| edition.issue_date.starts_with(&iso))
}

/// Capability to query the year-scoped edition index
#[async_trait]
pub trait EditionLookup: Send + Sync {
    /// All editions listed for the key's year, in index order.
    async fn fetch_year_list(&self, key: &LookupKey) -> Result<Vec<RemoteEdition>, LookupError>;

    /// Token of the edition published on `date`, if the index lists one.
    async fn fetch_by_date(
        &self,
        key: &LookupKey,
        date: NaiveDate,
    ) -> Result<Option<String>, LookupError> {
        let editions = self.fetch_year_list(key).await?;
        Ok(find_by_date(&editions, date).map(|edition| edition.teg_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_FIXTURE: &str = r#"{
        "data": {
            "searchEditions": {
                "edges": [
                    { "node": { "issueDate": "2025-05-24T00:00:00Z", "tegId": "abc123" } },
                    { "node": { "issueDate": "2025-05-17T00:00:00Z", "tegId": "def456" } },
                    { "node": null }
                ]
            }
        }
    }"#;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_lookup_key_endpoint() {
        let key = LookupKey::for_year(2024);
        assert_eq!(
            key.endpoint(DEFAULT_INDEX_URL),
            "https://jingking.github.io/The-Economist-Audio-List/searchEditions2024.json"
        );
    }

    #[test]
    fn test_parse_search_editions_fixture() {
        let editions = parse_search_editions(INDEX_FIXTURE).unwrap();
        assert_eq!(editions.len(), 2);
        assert_eq!(editions[0].teg_id, "abc123");
        assert_eq!(editions[0].date(), Some(d("2025-05-24")));
    }

    #[test]
    fn test_parse_search_editions_missing_levels_is_empty() {
        assert!(parse_search_editions("{}").unwrap().is_empty());
        assert!(parse_search_editions(r#"{"data": {}}"#).unwrap().is_empty());
        assert!(parse_search_editions(r#"{"data": {"searchEditions": {}}}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_search_editions_malformed() {
        let result = parse_search_editions("<html>not found</html>");
        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }

    #[test]
    fn test_find_by_date_prefix_match() {
        let editions = parse_search_editions(INDEX_FIXTURE).unwrap();
        let found = find_by_date(&editions, d("2025-05-17")).unwrap();
        assert_eq!(found.teg_id, "def456");
        assert!(find_by_date(&editions, d("2025-05-10")).is_none());
    }

    #[test]
    fn test_remote_edition_date_unparseable() {
        let edition = RemoteEdition {
            issue_date: "soon".to_string(),
            teg_id: "x".to_string(),
        };
        assert_eq!(edition.date(), None);
    }
}
