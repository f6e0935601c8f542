//! Shared error types for the services crate.

use thiserror::Error;

use items_api::ApiError;
use items_core::model::ItemError;
use items_core::state::Operation;

/// Errors emitted by `ItemSyncService` and `ItemsController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyncError {
    /// Rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ItemError),
    /// The server answered non-2xx.
    #[error("request failed with status {status}")]
    Request { status: u16, detail: Option<String> },
    /// No usable response: unreachable server or unreadable body.
    #[error("network error: {0}")]
    Network(String),
}

impl From<ApiError> for SyncError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, detail } => Self::Request { status, detail },
            other => Self::Network(other.to_string()),
        }
    }
}

impl SyncError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Validation(_) | Self::Network(_) => None,
        }
    }

    /// The message a user sees for this failure of `operation`.
    #[must_use]
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Request {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Request { detail: None, .. } | Self::Network(_) => {
                operation.failure_message().to_owned()
            }
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] items_api::ApiConfigError),
}
