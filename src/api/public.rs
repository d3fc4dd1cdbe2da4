//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::history::StorageError;

// Errors

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to generate reply: {0:#}")]
    Upstream(anyhow::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::Validation(_) => StatusCode::BAD_REQUEST,
            ChatError::Upstream(_) | ChatError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert `ChatError` into an Axum compatible response.
impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match &self {
            ChatError::Validation(msg) => tracing::warn!("Rejected chat request: {}", msg),
            _ => tracing::error!("{}", self),
        }

        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod index {
    pub use crate::api::routes::index::public::*;
}
