mod config;
pub use config::{AppConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
