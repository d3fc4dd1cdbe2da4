use std::sync::Arc;

use crate::completion::BoxedCompletion;
use crate::core::AppConfig;
use crate::history::LogStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub history: LogStore,
    pub completion: BoxedCompletion,
}

impl AppState {
    pub fn new(completion: BoxedCompletion, config: &AppConfig) -> Self {
        Self {
            history: LogStore::new(&config.history_path),
            completion,
        }
    }
}
