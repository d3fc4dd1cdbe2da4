//! Public types for the chat API
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct ChatRequest {
    // Optional so a missing field gets the same error payload as an
    // empty one instead of an extractor rejection
    #[serde(default, alias = "mensagem")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatResponse {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
