use std::sync::Arc;
use std::time::Duration;

use anyhow::{Error, Result, bail};
use async_trait::async_trait;

use super::wire::{Message, Role, completion};
use crate::core::AppConfig;

/// Turns a single user message into a reply from a language model.
#[async_trait]
pub trait Completion {
    async fn complete(&self, message: &str) -> Result<String, Error>;
}

pub type BoxedCompletion = Arc<dyn Completion + Send + Sync + 'static>;

/// Completion client for Groq's OpenAI compatible chat API. Model,
/// temperature and credential are fixed at construction.
pub struct GroqClient {
    http: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl GroqClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_hostname: config.api_hostname.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl Completion for GroqClient {
    async fn complete(&self, message: &str) -> Result<String, Error> {
        let messages = vec![Message::new(Role::User, message)];
        let resp = completion(
            &self.http,
            &messages,
            &self.api_hostname,
            &self.api_key,
            &self.model,
            self.temperature,
        )
        .await?;

        let msg = &resp["choices"][0]["message"];
        if !msg.is_object() {
            bail!("No message received. Resp:\n\n {}", resp);
        }

        // Models occasionally answer with a null content
        Ok(msg["content"].as_str().unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_hostname: &str) -> AppConfig {
        AppConfig {
            history_path: String::from("unused.db"),
            api_hostname: api_hostname.to_string(),
            api_key: String::from("test-key"),
            model: String::from("llama-3.1-8b-instant"),
            temperature: 0.7,
            request_timeout_secs: 5,
        }
    }

    async fn mock_reply(server: &mut mockito::ServerGuard, body: &str) -> mockito::Mock {
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_complete_returns_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_reply(
            &mut server,
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "hi there"}}]}"#,
        )
        .await;

        let client = GroqClient::new(&test_config(&server.url())).unwrap();
        let reply = client.complete("hello").await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply, "hi there");
    }

    #[tokio::test]
    async fn test_complete_null_content_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_reply(
            &mut server,
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]}"#,
        )
        .await;

        let client = GroqClient::new(&test_config(&server.url())).unwrap();
        assert_eq!(client.complete("hello").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_complete_without_choices_fails() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_reply(&mut server, r#"{"choices": []}"#).await;

        let client = GroqClient::new(&test_config(&server.url())).unwrap();
        let err = client.complete("hello").await.unwrap_err();
        assert!(err.to_string().contains("No message received"));
    }

    #[tokio::test]
    async fn test_complete_unreachable_host_fails() {
        // Nothing listens on port 9 locally
        let client = GroqClient::new(&test_config("http://127.0.0.1:9")).unwrap();
        assert!(client.complete("hello").await.is_err());
    }
}
