// Failure taxonomy for the stock components.
//
// There is exactly one error kind: the stock feed could not be retrieved.
// It is caught at the component boundary and converted into a `Notice`
// for the render path; it is never retried and never propagated further.

use thiserror::Error;

use crate::models::Notice;

#[derive(Debug, Error)]
pub enum AppError {
    /// Network failure, non-success HTTP status, or an undecodable body
    /// when retrieving the stock feed.
    #[error("failed to retrieve stock feed: {0}")]
    SourceFetch(anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::SourceFetch(error.into())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::SourceFetch(error)
    }
}

impl AppError {
    /// Convert into the render payload, emitting the one diagnostic
    /// trace the error gets.
    pub fn into_notice(self) -> Notice {
        tracing::error!("stock feed error: {:?}", self);
        Notice::new(self.to_string())
    }
}

/// Result type used on the feed path.
pub type AppResult<T> = Result<T, AppError>;
