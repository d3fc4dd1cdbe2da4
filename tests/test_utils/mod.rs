//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use axum::{Router, body::Body};
use tempfile::TempDir;

use chatgate::api::{AppState, app};
use chatgate::completion::{BoxedCompletion, Completion};
use chatgate::core::{AppConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use chatgate::history::LogStore;

/// Completion that always answers with the same reply
pub struct StaticCompletion(pub String);

#[async_trait]
impl Completion for StaticCompletion {
    async fn complete(&self, _message: &str) -> Result<String, Error> {
        Ok(self.0.clone())
    }
}

/// Completion that always fails like an unreachable upstream
pub struct FailingCompletion;

#[async_trait]
impl Completion for FailingCompletion {
    async fn complete(&self, _message: &str) -> Result<String, Error> {
        Err(anyhow!("error sending request: connection refused"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub history: LogStore,
    // Held so the backing file outlives the test
    _dir: TempDir,
}

pub fn test_config(dir: &TempDir, api_hostname: &str) -> AppConfig {
    AppConfig {
        history_path: dir.path().join("historico.db").display().to_string(),
        api_hostname: api_hostname.to_string(),
        api_key: String::from("test-api-key"),
        model: DEFAULT_MODEL.to_string(),
        temperature: DEFAULT_TEMPERATURE,
        request_timeout_secs: 5,
    }
}

/// Creates a test application router with its history stored in a
/// temporary directory.
pub fn test_app(completion: BoxedCompletion) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&dir, "http://localhost:9");
    test_app_with_config(completion, config, dir)
}

pub fn test_app_with_config(
    completion: BoxedCompletion,
    config: AppConfig,
    dir: TempDir,
) -> TestApp {
    let history = LogStore::new(&config.history_path);
    let app_state = AppState::new(completion, &config);
    TestApp {
        router: app(Arc::new(app_state)),
        history,
        _dir: dir,
    }
}

pub fn replying(reply: &str) -> BoxedCompletion {
    Arc::new(StaticCompletion(reply.to_string()))
}

pub fn failing() -> BoxedCompletion {
    Arc::new(FailingCompletion)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}
