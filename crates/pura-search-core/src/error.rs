//! Error types for the search engine and content validation.

use thiserror::Error;

/// Errors surfaced by [`smart_search`](crate::search::smart_search) and the
/// request-validation helpers in [`models`](crate::models).
///
/// `Retrieval` is kept distinct from an empty result set so callers can tell
/// "no matches" apart from "the corpus could not be loaded".
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid category: '{0}'. Must be one of history, culture, traditions, festivals, architecture, ceremonies, philosophy, general")]
    InvalidCategory(String),

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("corpus retrieval failed: {0}")]
    Retrieval(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
