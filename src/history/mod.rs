//! Chat history persisted as a single table in a backing file

mod models;
mod store;

pub use models::{COLUMNS, ChatLog, ChatRecord};
pub use store::{LogStore, StorageError, TABLE_NAME};
