use std::{fmt::Display, path::PathBuf, sync::Arc};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Request to {endpoint} failed: {reason}")]
    NetworkFailure {
        endpoint: &'static str,
        reason: String,
    },

    #[error("Could not read video file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("Invalid client configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ClientError {
    pub fn network(endpoint: &'static str, reason: impl Display) -> Self {
        ClientError::NetworkFailure {
            endpoint,
            reason: reason.to_string(),
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientError::FileUnreadable {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
