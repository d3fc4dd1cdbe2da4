use std::env;

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Clone, Debug)]
pub struct AppConfig {
    // Backing file for the chat history table
    pub history_path: String,
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let history_path = env::var("CHATGATE_HISTORY_PATH")
            .unwrap_or_else(|_| "./historico_chat.db".to_string());
        let api_hostname = env::var("CHATGATE_API_HOSTNAME")
            .unwrap_or_else(|_| "https://api.groq.com/openai".to_string());
        let api_key = env::var("GROQ_API_KEY").unwrap_or_default();
        let request_timeout_secs = env::var("CHATGATE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        Self {
            history_path,
            api_hostname,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs,
        }
    }
}
