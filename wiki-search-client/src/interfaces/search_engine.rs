//! Search engine trait definition.
//!
//! This module defines the abstract interface for search engine
//! operations, allowing for different backend implementations
//! (OpenSearch, Elasticsearch, mocks for tests).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use wiki_search_shared::{SearchHit, SearchRequest};

/// Abstract interface for search engine operations.
///
/// All operations are blocking request-response calls with no internal
/// concurrency; callers await them sequentially. Implementations must be
/// `Send + Sync` so a single handle can be shared across async tasks
/// when the underlying transport allows it.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>` for consistent error
/// handling. A failed call never yields an empty success value.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Execute a full-text search and return normalized hits.
    ///
    /// # Arguments
    ///
    /// * `request` - Index name, query text, and result limit
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SearchHit>)` - Up to `request.limit` hits in engine
    ///   relevance order (descending score), never re-sorted
    /// * `Err(SearchError::QueryError)` - If the index is missing, the
    ///   request is rejected, or the engine call fails
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError>;

    /// Return the total number of documents in an index.
    ///
    /// Zero is a valid result for an empty index; a missing index fails
    /// with `SearchError::QueryError`.
    async fn count(&self, index: &str) -> Result<u64, SearchError>;

    /// Return up to `size` arbitrary document bodies from an index, with
    /// no query filter. An empty vec is a valid result for an empty
    /// index.
    async fn sample(&self, index: &str, size: usize) -> Result<Vec<Value>, SearchError>;

    /// Issue a lightweight request to confirm the endpoint is reachable
    /// and the credentials are accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the engine answered
    /// * `Err(SearchError::ConnectionError)` - If the endpoint is
    ///   unreachable or authentication was rejected
    async fn ping(&self) -> Result<(), SearchError>;
}
