use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the computation service on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{detail}")]
pub struct ApiError {
    pub detail: String,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
