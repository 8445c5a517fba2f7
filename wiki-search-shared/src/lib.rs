//! # Wiki Search Shared
//!
//! Shared types for the wiki search tools: the parameters of a search
//! call and the normalized hit returned to callers.

use serde::{Deserialize, Serialize};

/// Default number of hits returned when the caller does not set a limit.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Parameters for a single full-text search call.
///
/// The index name identifies the document collection to query; it is not
/// checked for existence here (a search against a missing index fails
/// engine-side). The query text is free-form and may be empty, in which
/// case the engine's default match semantics apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Name of the index to search.
    pub index: String,
    /// Free-form query text.
    pub query: String,
    /// Upper bound on the number of hits returned.
    pub limit: usize,
}

impl SearchRequest {
    /// Create a request with the default result limit.
    pub fn new(index: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            query: query.into(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Set the maximum number of hits to return.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One normalized search hit.
///
/// Display fields (`url`, `title`, `content`) are always present and
/// default to the empty string when the source document lacks the
/// corresponding key. Hits are produced in engine relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document identifier assigned by the engine.
    pub id: String,
    /// Engine-computed relevance score; higher is more relevant.
    pub score: f64,
    /// Source URL of the document, if any.
    #[serde(default)]
    pub url: String,
    /// Document title, if any.
    #[serde(default)]
    pub title: String,
    /// Document body text, if any.
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = SearchRequest::new("wiki_en", "olympic games");

        assert_eq!(request.index, "wiki_en");
        assert_eq!(request.query, "olympic games");
        assert_eq!(request.limit, DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn test_request_with_limit() {
        let request = SearchRequest::new("wiki_en", "olympic games").with_limit(3);

        assert_eq!(request.limit, 3);
    }

    #[test]
    fn test_hit_display_fields_default_to_empty() {
        let hit: SearchHit =
            serde_json::from_value(serde_json::json!({ "id": "42", "score": 1.5 })).unwrap();

        assert_eq!(hit.id, "42");
        assert_eq!(hit.url, "");
        assert_eq!(hit.title, "");
        assert_eq!(hit.content, "");
    }
}
