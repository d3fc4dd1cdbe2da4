use chrono::NaiveDateTime;

/// Column set of the history table, in storage order.
pub const COLUMNS: [&str; 5] = ["id", "user_message", "bot_reply", "date", "time"];

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Clone, Debug, PartialEq)]
pub struct ChatRecord {
    pub id: i64,
    pub user_message: String,
    pub bot_reply: String,
    pub date: String,
    pub time: String,
}

impl ChatRecord {
    pub fn new(id: i64, user_message: &str, bot_reply: &str, now: &NaiveDateTime) -> Self {
        Self {
            id,
            user_message: user_message.to_string(),
            bot_reply: bot_reply.to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            time: now.format(TIME_FORMAT).to_string(),
        }
    }
}

/// In-memory copy of the whole history table. Records are kept in
/// insertion order which is also chronological order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    records: Vec<ChatRecord>,
}

impl ChatLog {
    pub fn from_records(records: Vec<ChatRecord>) -> Self {
        Self { records }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&ChatRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next identifier is one past the largest existing id, not the
    /// row count, so gaps left by hand-edited files are never reused.
    pub fn next_id(&self) -> i64 {
        self.records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
    }

    pub fn append(&mut self, user_message: &str, bot_reply: &str, now: &NaiveDateTime) {
        let record = ChatRecord::new(self.next_id(), user_message, bot_reply, now);
        self.records.push(record);
    }
}
