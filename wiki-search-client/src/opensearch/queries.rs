//! Search query builders.
//!
//! This module provides functions to build the JSON bodies sent to the
//! engine's `_search` endpoint.

use serde_json::{json, Value};

/// The document fields scanned by a full-text search.
///
/// The field set is fixed; parameterizing it per index schema would go
/// through this constant.
pub const SEARCH_FIELDS: &[&str] = &["title", "text"];

/// Build a multi-field match query body.
///
/// The query scans [`SEARCH_FIELDS`] for the given text and bounds the
/// result set to `size` hits. No relevance tuning is applied: no
/// boosting, no fuzziness, no phrase matching. An empty query text is
/// legal and matches per the engine's default semantics.
pub fn build_search_query(query_text: &str, size: usize) -> Value {
    json!({
        "query": {
            "multi_match": {
                "query": query_text,
                "fields": SEARCH_FIELDS
            }
        },
        "size": size
    })
}

/// Build an unfiltered query body returning up to `size` arbitrary
/// documents, used by the diagnostic sample operation.
pub fn build_sample_query(size: usize) -> Value {
    json!({
        "query": {
            "match_all": {}
        },
        "size": size
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_query() {
        let query = build_search_query("olympic games", 5);

        assert_eq!(query["query"]["multi_match"]["query"], "olympic games");
        assert_eq!(query["size"], 5);

        let fields = query["query"]["multi_match"]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], "title");
        assert_eq!(fields[1], "text");
    }

    #[test]
    fn test_build_search_query_empty_text() {
        let query = build_search_query("", 3);

        assert_eq!(query["query"]["multi_match"]["query"], "");
        assert_eq!(query["size"], 3);
    }

    #[test]
    fn test_build_search_query_has_no_tuning_parameters() {
        let query = build_search_query("test", 5);
        let multi_match = query["query"]["multi_match"].as_object().unwrap();

        assert!(multi_match.get("fuzziness").is_none());
        assert!(multi_match.get("type").is_none());
        assert_eq!(multi_match.len(), 2);
    }

    #[test]
    fn test_build_sample_query() {
        let query = build_sample_query(2);

        assert!(query["query"]["match_all"].is_object());
        assert_eq!(query["size"], 2);
    }
}
