//! Search error types.
//!
//! This module defines the error categories that can occur while talking
//! to the search engine. The categories are deliberately coarse so that
//! callers can give different guidance for each: fix the credentials
//! (configuration), fix the network or endpoint (connection), or fix the
//! request or index (query).

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    /// Required credential missing or connection settings invalid.
    /// Raised before any network activity; never retried.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Endpoint unreachable or authentication rejected.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Malformed request, missing index, or engine-side failure during a
    /// search, count, or sample call. Does not invalidate the connection
    /// handle for subsequent calls.
    #[error("Query error: {0}")]
    QueryError(String),
}

impl SearchError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories_are_distinguishable() {
        let config = SearchError::configuration("password not set");
        let connection = SearchError::connection("endpoint unreachable");
        let query = SearchError::query("index not found");

        assert_eq!(config.to_string(), "Configuration error: password not set");
        assert_eq!(
            connection.to_string(),
            "Connection error: endpoint unreachable"
        );
        assert_eq!(query.to_string(), "Query error: index not found");
    }
}
