use chrono::NaiveDateTime;
use sqlx::SqliteExecutor;

use crate::db::DbPool;
use crate::errors::AppError;
use super::types::*;

#[derive(sqlx::FromRow)]
struct MeetingRow {
    id: i64,
    title: String,
    date: NaiveDateTime,
    meeting_type: String,
    location: Option<String>,
    quorum_required: i64,
    status: String,
    ended_at: Option<NaiveDateTime>,
}

impl TryFrom<MeetingRow> for Meeting {
    type Error = AppError;

    fn try_from(row: MeetingRow) -> Result<Self, Self::Error> {
        Ok(Meeting {
            id: row.id,
            title: row.title,
            date: row.date,
            meeting_type: row.meeting_type,
            location: row.location,
            quorum_required: row.quorum_required,
            status: row.status.parse()?,
            ended_at: row.ended_at,
        })
    }
}

const MEETING_SELECT: &str = "\
SELECT id, title, date, meeting_type, location, quorum_required, status, ended_at \
FROM meetings";

/// Insert a meeting with status `Ongoing` and no end time.
pub async fn insert<'e, E>(executor: E, meeting: &NewMeeting) -> Result<i64, AppError>
where
    E: SqliteExecutor<'e>,
{
    let title = meeting.title.trim();
    let meeting_type = meeting.meeting_type.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Meeting title is required".to_string()));
    }
    if meeting_type.is_empty() {
        return Err(AppError::Validation("Meeting type is required".to_string()));
    }
    if meeting.quorum_required < 0 {
        return Err(AppError::Validation("Quorum cannot be negative".to_string()));
    }
    let location = meeting
        .location
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let id = sqlx::query(
        "INSERT INTO meetings (title, date, meeting_type, location, quorum_required, status) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(title)
    .bind(meeting.date)
    .bind(meeting_type)
    .bind(location)
    .bind(meeting.quorum_required)
    .bind(MeetingStatus::Ongoing.as_str())
    .execute(executor)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Meeting>, AppError> {
    let sql = format!("{MEETING_SELECT} WHERE id = ?1");
    let row = sqlx::query_as::<_, MeetingRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Meeting::try_from).transpose()
}

/// All meetings, newest date first.
pub async fn find_all(pool: &DbPool) -> Result<Vec<Meeting>, AppError> {
    let sql = format!("{MEETING_SELECT} ORDER BY date DESC, id DESC");
    let rows = sqlx::query_as::<_, MeetingRow>(&sql).fetch_all(pool).await?;
    rows.into_iter().map(Meeting::try_from).collect()
}

/// Meetings in the given status, newest date first.
pub async fn find_by_status(
    pool: &DbPool,
    status: MeetingStatus,
) -> Result<Vec<Meeting>, AppError> {
    let sql = format!("{MEETING_SELECT} WHERE status = ?1 ORDER BY date DESC, id DESC");
    let rows = sqlx::query_as::<_, MeetingRow>(&sql)
        .bind(status.as_str())
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(Meeting::try_from).collect()
}

/// Move an ongoing meeting to `Finished`. A finished meeting is left untouched.
///
/// Returns whether a row changed.
pub async fn mark_finished<'e, E>(
    executor: E,
    id: i64,
    ended_at: NaiveDateTime,
) -> Result<bool, AppError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE meetings SET status = ?2, ended_at = ?3 WHERE id = ?1 AND status = ?4",
    )
    .bind(id)
    .bind(MeetingStatus::Finished.as_str())
    .bind(ended_at)
    .bind(MeetingStatus::Ongoing.as_str())
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a meeting; agenda items, attendance, motions and statements go with it.
///
/// Returns whether a row was removed.
pub async fn delete(pool: &DbPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM meetings WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
