use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rusqlite::params;
use tokio::sync::Mutex;
use tokio_rusqlite::Connection;

use super::models::{ChatLog, ChatRecord};

pub const TABLE_NAME: &str = "historico";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Chat history database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Chat history connection error: {0}")]
    Connection(String),

    #[error("Chat history I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tokio_rusqlite::Error> for StorageError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        match err {
            tokio_rusqlite::Error::Rusqlite(e) => StorageError::Database(e),
            other => StorageError::Connection(other.to_string()),
        }
    }
}

/// File-backed chat history. Every write replaces the whole table with
/// the in-memory log.
pub struct LogStore {
    path: PathBuf,
    // Serializes load + append + save within this process
    write_lock: Mutex<()>,
}

impl LogStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full history. A missing backing file is an empty log and
    /// is not created as a side effect.
    pub async fn load(&self) -> Result<ChatLog, StorageError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(ChatLog::default());
        }

        let db = Connection::open(&self.path).await?;
        let records = db
            .call(|conn| {
                let table_count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [TABLE_NAME],
                    |row| row.get(0),
                )?;
                if table_count == 0 {
                    return Ok(Vec::new());
                }

                let mut stmt = conn.prepare(&format!(
                    "SELECT id, user_message, bot_reply, date, time FROM {} ORDER BY rowid",
                    TABLE_NAME
                ))?;
                let records = stmt
                    .query_map([], |row| {
                        Ok(ChatRecord {
                            id: row.get(0)?,
                            user_message: row.get(1)?,
                            bot_reply: row.get(2)?,
                            date: row.get(3)?,
                            time: row.get(4)?,
                        })
                    })?
                    .collect::<Result<Vec<ChatRecord>, rusqlite::Error>>()?;
                Ok(records)
            })
            .await?;

        Ok(ChatLog::from_records(records))
    }

    /// Overwrite the backing file with `log`. The delete and re-insert
    /// run in one transaction so an interrupted write leaves the previous
    /// table in place.
    pub async fn save(&self, log: &ChatLog) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let records = log.records().to_vec();
        let db = Connection::open(&self.path).await?;
        db.call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER NOT NULL,
                    user_message TEXT NOT NULL,
                    bot_reply TEXT NOT NULL,
                    date TEXT NOT NULL,
                    time TEXT NOT NULL
                )",
                TABLE_NAME
            ))?;
            tx.execute(&format!("DELETE FROM {}", TABLE_NAME), [])?;
            {
                let mut stmt = tx.prepare(&format!(
                    "INSERT INTO {} (id, user_message, bot_reply, date, time) VALUES (?1, ?2, ?3, ?4, ?5)",
                    TABLE_NAME
                ))?;
                for r in &records {
                    stmt.execute(params![r.id, r.user_message, r.bot_reply, r.date, r.time])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await?;

        Ok(())
    }

    /// Append one exchange to `log` and rewrite the backing file with the
    /// result.
    pub async fn append_and_save(
        &self,
        mut log: ChatLog,
        user_message: &str,
        bot_reply: &str,
        now: NaiveDateTime,
    ) -> Result<ChatLog, StorageError> {
        log.append(user_message, bot_reply, &now);
        self.save(&log).await?;
        Ok(log)
    }

    /// Load, append and save while holding the store's write lock.
    pub async fn record(
        &self,
        user_message: &str,
        bot_reply: &str,
        now: NaiveDateTime,
    ) -> Result<ChatLog, StorageError> {
        let _guard = self.write_lock.lock().await;
        let log = self.load().await?;
        self.append_and_save(log, user_message, bot_reply, now).await
    }
}
