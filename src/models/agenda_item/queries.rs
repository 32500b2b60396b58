use sqlx::SqliteConnection;

use crate::db::DbPool;
use crate::errors::AppError;
use super::types::*;

/// Insert agenda items for a meeting in the given order. Titles must already be trimmed.
pub async fn insert_all(
    conn: &mut SqliteConnection,
    meeting_id: i64,
    titles: &[String],
) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::with_capacity(titles.len());
    for title in titles {
        let id = sqlx::query("INSERT INTO agenda_items (meeting_id, title) VALUES (?1, ?2)")
            .bind(meeting_id)
            .bind(title)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        ids.push(id);
    }
    Ok(ids)
}

/// Agenda items of a meeting in creation order.
pub async fn find_for_meeting(pool: &DbPool, meeting_id: i64) -> Result<Vec<AgendaItem>, AppError> {
    let items = sqlx::query_as::<_, AgendaItem>(
        "SELECT id, meeting_id, title, is_completed FROM agenda_items \
         WHERE meeting_id = ?1 ORDER BY id",
    )
    .bind(meeting_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<AgendaItem>, AppError> {
    let item = sqlx::query_as::<_, AgendaItem>(
        "SELECT id, meeting_id, title, is_completed FROM agenda_items WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}
