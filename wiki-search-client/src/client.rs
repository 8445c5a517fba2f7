//! Wiki search client.
//!
//! This module provides the main client application code uses to query
//! the wiki search indices. It validates requests and delegates to an
//! injected [`SearchEngine`] backend.

use serde_json::Value;
use tracing::debug;

use crate::errors::SearchError;
use crate::interfaces::SearchEngine;
use wiki_search_shared::{SearchHit, SearchRequest};

/// The main client for querying the wiki search indices.
///
/// Wraps a [`SearchEngine`] backend so that tests can substitute a mock
/// and production code can swap engine implementations. The client
/// performs no retries: failures propagate to the caller, and a failed
/// query never turns into an empty success.
pub struct WikiSearchClient {
    engine: Box<dyn SearchEngine>,
}

impl WikiSearchClient {
    /// Create a client over the given engine backend.
    pub fn new(engine: Box<dyn SearchEngine>) -> Self {
        Self { engine }
    }

    /// Run a full-text search.
    ///
    /// Input: [`SearchRequest`] (index, query text, limit)
    /// Output: normalized hits in engine relevance order, at most
    /// `request.limit` of them.
    ///
    /// An empty query text is legal and matches per the engine's default
    /// semantics. An empty index name or a zero limit is a malformed
    /// request and fails with a query error before reaching the engine.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError> {
        if request.index.is_empty() {
            return Err(SearchError::query("index name must not be empty"));
        }
        if request.limit == 0 {
            return Err(SearchError::query("result limit must be positive"));
        }

        self.engine.search(request).await
    }

    /// Return the total document count of an index.
    pub async fn count(&self, index: &str) -> Result<u64, SearchError> {
        if index.is_empty() {
            return Err(SearchError::query("index name must not be empty"));
        }

        self.engine.count(index).await
    }

    /// Return up to `size` arbitrary document bodies for inspection.
    pub async fn sample(&self, index: &str, size: usize) -> Result<Vec<Value>, SearchError> {
        if index.is_empty() {
            return Err(SearchError::query("index name must not be empty"));
        }

        self.engine.sample(index, size).await
    }

    /// Check that the engine is reachable and the credentials are
    /// accepted.
    pub async fn ping(&self) -> Result<(), SearchError> {
        self.engine.ping().await
    }

    /// Release the connection handle.
    ///
    /// Dropping the client on any exit path releases it as well; this
    /// method only makes the release explicit at the call site.
    pub fn close(self) {
        debug!("Wiki search client closed");
    }
}
