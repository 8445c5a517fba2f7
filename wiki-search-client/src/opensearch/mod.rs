//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngine`
//! for OpenSearch-compatible endpoints.

mod client;
mod queries;

pub use client::OpenSearchClient;
pub use queries::SEARCH_FIELDS;
