//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngine`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cert::CertificateValidation,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    CountParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchEngine;
use crate::opensearch::queries;
use wiki_search_shared::{SearchHit, SearchRequest};

/// Search engine client for OpenSearch-compatible endpoints.
///
/// Construction validates the configuration and builds an in-memory
/// transport with basic authentication; no network activity happens
/// until the first call. The handle wraps a connection pool and may be
/// reused across sequential calls.
///
/// # Example
///
/// ```ignore
/// let config = ConnectionConfig::new("https://localhost:9200", "elastic", password);
/// let client = OpenSearchClient::new(config)?;
///
/// let request = SearchRequest::new("wiki_en", "Paris 2024 Olympic Games").with_limit(3);
/// let hits = client.search(&request).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new client from the given connection settings.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint URL, credentials, and TLS policy
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError::ConfigurationError)` - If the password is
    ///   empty, the endpoint URL is invalid, or the transport cannot be
    ///   built. Raised before any network activity.
    pub fn new(config: ConnectionConfig) -> Result<Self, SearchError> {
        if config.password.is_empty() {
            return Err(SearchError::configuration(
                "search engine password is not set",
            ));
        }

        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            SearchError::configuration(format!("invalid endpoint URL {}: {}", config.endpoint, e))
        })?;

        let conn_pool = SingleNodeConnectionPool::new(endpoint);
        let mut builder = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .auth(Credentials::Basic(
                config.username.clone(),
                config.password.clone(),
            ));

        if !config.verify_tls {
            warn!(
                endpoint = %config.endpoint,
                "TLS certificate verification is disabled"
            );
            builder = builder.cert_validation(CertificateValidation::None);
        }

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let transport = builder
            .build()
            .map_err(|e| SearchError::configuration(e.to_string()))?;

        info!(
            endpoint = %config.endpoint,
            username = %config.username,
            "Created search engine client"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Release the connection handle.
    ///
    /// Consuming the client drops the underlying transport and its
    /// connection pool. Dropping the handle on any other exit path has
    /// the same effect.
    pub fn close(self) {
        debug!("Search engine client closed");
    }

    /// Normalize one raw hit into a [`SearchHit`].
    ///
    /// `_id` and `_score` are required; a hit without them is a
    /// malformed engine response and fails the whole call. The display
    /// fields default to empty strings when absent from `_source`.
    fn parse_hit(hit: &Value) -> Result<SearchHit, SearchError> {
        let id = hit
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| SearchError::query("search hit is missing _id"))?
            .to_string();

        let score = hit
            .get("_score")
            .and_then(Value::as_f64)
            .ok_or_else(|| SearchError::query(format!("search hit {} is missing _score", id)))?;

        let source = hit.get("_source").unwrap_or(&Value::Null);

        Ok(SearchHit {
            id,
            score,
            url: Self::source_text(source, "url"),
            title: Self::source_text(source, "title"),
            content: Self::source_text(source, "text"),
        })
    }

    /// Look up a string field in a document body, defaulting to empty.
    fn source_text(source: &Value, key: &str) -> String {
        source
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl SearchEngine for OpenSearchClient {
    /// Execute a multi-field match query and normalize the hits.
    ///
    /// The hits come back in engine relevance order (descending score)
    /// and are returned unaltered in that order.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError> {
        let body = queries::build_search_query(&request.query, request.limit);

        let response = self
            .client
            .search(SearchParts::Index(&[&request.index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchError::query(format!(
                "search failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::query(format!("invalid search response: {}", e)))?;

        let raw_hits = response_body["hits"]["hits"]
            .as_array()
            .ok_or_else(|| SearchError::query("search response is missing hits"))?;

        let hits = raw_hits
            .iter()
            .map(Self::parse_hit)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(index = %request.index, hits = hits.len(), "Search completed");
        Ok(hits)
    }

    async fn count(&self, index: &str) -> Result<u64, SearchError> {
        let response = self
            .client
            .count(CountParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Count request failed");
            return Err(SearchError::query(format!(
                "count failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::query(format!("invalid count response: {}", e)))?;

        response_body
            .get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| SearchError::query("count response is missing count"))
    }

    async fn sample(&self, index: &str, size: usize) -> Result<Vec<Value>, SearchError> {
        let body = queries::build_sample_query(size);

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Sample request failed");
            return Err(SearchError::query(format!(
                "sample failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::query(format!("invalid sample response: {}", e)))?;

        let raw_hits = response_body["hits"]["hits"]
            .as_array()
            .ok_or_else(|| SearchError::query("sample response is missing hits"))?;

        let documents = raw_hits
            .iter()
            .map(|hit| hit.get("_source").cloned().unwrap_or(Value::Null))
            .collect();

        Ok(documents)
    }

    async fn ping(&self) -> Result<(), SearchError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            return Err(SearchError::connection(format!(
                "ping failed with status {}",
                status
            )));
        }

        debug!("Search engine is reachable");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> ConnectionConfig {
        ConnectionConfig::new("https://localhost:9200", "elastic", "secret")
    }

    #[test]
    fn test_new_rejects_empty_password() {
        let config = ConnectionConfig::new("https://localhost:9200", "elastic", "");

        let result = OpenSearchClient::new(config);
        assert!(matches!(result, Err(SearchError::ConfigurationError(_))));
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let config = ConnectionConfig::new("not a url", "elastic", "secret");

        let result = OpenSearchClient::new(config);
        assert!(matches!(result, Err(SearchError::ConfigurationError(_))));
    }

    #[test]
    fn test_new_with_valid_config() {
        assert!(OpenSearchClient::new(test_config()).is_ok());
        assert!(OpenSearchClient::new(test_config().without_tls_verification()).is_ok());
    }

    #[test]
    fn test_parse_hit() {
        let hit = json!({
            "_id": "12345",
            "_score": 9.1,
            "_source": {
                "url": "https://en.wikipedia.org/wiki/Paris",
                "title": "Paris",
                "text": "Paris is the capital of France."
            }
        });

        let result = OpenSearchClient::parse_hit(&hit).unwrap();

        assert_eq!(result.id, "12345");
        assert_eq!(result.score, 9.1);
        assert_eq!(result.url, "https://en.wikipedia.org/wiki/Paris");
        assert_eq!(result.title, "Paris");
        assert_eq!(result.content, "Paris is the capital of France.");
    }

    #[test]
    fn test_parse_hit_missing_title_defaults_to_empty() {
        let hit = json!({
            "_id": "12345",
            "_score": 1.0,
            "_source": {
                "text": "Body without a title."
            }
        });

        let result = OpenSearchClient::parse_hit(&hit).unwrap();

        assert_eq!(result.title, "");
        assert_eq!(result.url, "");
        assert_eq!(result.content, "Body without a title.");
    }

    #[test]
    fn test_parse_hit_missing_source() {
        let hit = json!({
            "_id": "12345",
            "_score": 1.0
        });

        let result = OpenSearchClient::parse_hit(&hit).unwrap();

        assert_eq!(result.id, "12345");
        assert_eq!(result.url, "");
        assert_eq!(result.title, "");
        assert_eq!(result.content, "");
    }

    #[test]
    fn test_parse_hit_missing_id_is_an_error() {
        let hit = json!({
            "_score": 1.0,
            "_source": { "title": "No id" }
        });

        let result = OpenSearchClient::parse_hit(&hit);
        assert!(matches!(result, Err(SearchError::QueryError(_))));
    }

    #[test]
    fn test_parse_hit_missing_score_is_an_error() {
        let hit = json!({
            "_id": "12345",
            "_source": { "title": "No score" }
        });

        let result = OpenSearchClient::parse_hit(&hit);
        assert!(matches!(result, Err(SearchError::QueryError(_))));
    }
}
