use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Statement {
    pub id: i64,
    pub meeting_id: i64,
    pub agenda_item_id: Option<i64>,
    pub speaker_id: Option<i64>,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct NewStatement {
    pub speaker_id: Option<i64>,
    pub content: String,
    pub agenda_item_id: Option<i64>,
}

/// Sort direction for a meeting's statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chronology {
    /// Oldest first, for reports.
    OldestFirst,
    /// Newest first, for the live meeting view.
    NewestFirst,
}
