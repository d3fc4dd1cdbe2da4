//! Router for the chat API

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use chrono::Local;

use super::public;
use crate::api::public::ChatError;
use crate::api::state::SharedState;

/// Forward a message to the completion service and log the exchange
async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::ChatRequest>, JsonRejection>,
) -> Result<Json<public::ChatResponse>, ChatError> {
    let Json(payload) = payload.map_err(|e| ChatError::Validation(e.body_text()))?;

    let message = payload
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ChatError::Validation(String::from("The user message is required")))?;

    let reply = state
        .completion
        .complete(&message)
        .await
        .map_err(ChatError::Upstream)?;

    let now = Local::now().naive_local();
    let log = state.history.record(&message, &reply, now).await?;
    if let Some(record) = log.last() {
        tracing::debug!("Saved chat record {} ({} total)", record.id, log.len());
    }

    Ok(Json(public::ChatResponse::new(&reply)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/chat", post(chat_handler))
}
