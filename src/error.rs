use thiserror::Error;

/// Failures that abort a publications fetch.
///
/// Missing fields on individual records are not errors; they are defaulted
/// where the record is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no scholar profile matches author id '{0}'")]
    AuthorNotFound(String),
    #[error("publication lookup failed: {0}")]
    FetchFailed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::FetchFailed(e.to_string())
    }
}
