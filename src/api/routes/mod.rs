//! API routes module

pub mod chat;
pub mod index;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Root redirect and API docs
        .merge(index::router())
        // Chat routes
        .merge(chat::router())
}
