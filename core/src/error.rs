use gridsearch_url::ParseError;

/// A DOM mutation or lookup failed.
///
/// Only the browser backend can produce these; the in-memory document never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("DOM operation failed: {message}")]
pub struct DomError {
    message: String,
}

impl DomError {
    /// Creates an error carrying the host's description of the failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the host's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while running a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The request itself was rejected (connectivity loss, CORS, ...).
    #[error("search request failed: {0}")]
    Network(String),
    /// The grid could not be updated with the results.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Invalid widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required option was missing or empty.
    #[error("missing required option `{0}`")]
    MissingField(&'static str),
    /// The search endpoint could not be parsed.
    #[error("invalid search URL: {0}")]
    InvalidUrl(#[from] ParseError),
}
