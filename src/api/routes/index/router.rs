//! Router for the root redirect and the API docs

use axum::{
    Json, Router,
    response::Redirect,
    routing::get,
};

use super::public;
use crate::api::state::SharedState;

pub const DOCS_PATH: &str = "/apidocs";

async fn index() -> Redirect {
    Redirect::to(DOCS_PATH)
}

async fn api_docs() -> Json<serde_json::Value> {
    Json(public::openapi_document())
}

/// Create the index router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route(DOCS_PATH, get(api_docs))
}
