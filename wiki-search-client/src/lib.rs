//! # Wiki Search Client
//!
//! This crate provides the client layer for querying a pre-populated
//! wiki search index. It includes definitions for errors, connection
//! configuration, the abstract engine interface, and a concrete
//! implementation for OpenSearch-compatible endpoints.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use client::WikiSearchClient;
pub use config::ConnectionConfig;
pub use errors::SearchError;
pub use interfaces::SearchEngine;
pub use self::opensearch::OpenSearchClient;
