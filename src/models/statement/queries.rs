use chrono::NaiveDateTime;

use crate::db::DbPool;
use crate::errors::AppError;
use super::types::*;

/// Insert a statement stamped with `timestamp`.
pub async fn insert(
    pool: &DbPool,
    meeting_id: i64,
    statement: &NewStatement,
    timestamp: NaiveDateTime,
) -> Result<i64, AppError> {
    let content = statement.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("Statement content is required".to_string()));
    }

    let id = sqlx::query(
        "INSERT INTO statements (meeting_id, agenda_item_id, speaker_id, content, timestamp) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(meeting_id)
    .bind(statement.agenda_item_id)
    .bind(statement.speaker_id)
    .bind(content)
    .bind(timestamp)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Statement>, AppError> {
    let statement = sqlx::query_as::<_, Statement>(
        "SELECT id, meeting_id, agenda_item_id, speaker_id, content, timestamp \
         FROM statements WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(statement)
}

/// Statements of a meeting by timestamp. Ties break on id in the same direction.
pub async fn find_for_meeting(
    pool: &DbPool,
    meeting_id: i64,
    order: Chronology,
) -> Result<Vec<Statement>, AppError> {
    let sql = match order {
        Chronology::OldestFirst => {
            "SELECT id, meeting_id, agenda_item_id, speaker_id, content, timestamp \
             FROM statements WHERE meeting_id = ?1 ORDER BY timestamp ASC, id ASC"
        }
        Chronology::NewestFirst => {
            "SELECT id, meeting_id, agenda_item_id, speaker_id, content, timestamp \
             FROM statements WHERE meeting_id = ?1 ORDER BY timestamp DESC, id DESC"
        }
    };
    let statements = sqlx::query_as::<_, Statement>(sql)
        .bind(meeting_id)
        .fetch_all(pool)
        .await?;
    Ok(statements)
}

pub async fn delete(pool: &DbPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM statements WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
