//! Web driver error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebError {
    #[error("No element matched selector {0:?}")]
    NotFound(String),

    #[error("Element {0:?} did not become visible within {1}ms")]
    VisibilityTimeout(String, u64),

    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Browser driver error: {0}")]
    Driver(String),
}

pub type WebResult<T> = Result<T, WebError>;
