//! Shared API types

pub mod error;
pub mod json;

use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;

/// Response body for operations that only report an outcome (deletes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
