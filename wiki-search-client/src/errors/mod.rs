//! Error types for the wiki search client.

mod search_error;

pub use search_error::SearchError;
