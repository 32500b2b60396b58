use sqlx::SqliteExecutor;

use crate::db::DbPool;
use crate::errors::AppError;
use super::types::*;

#[derive(sqlx::FromRow)]
struct AttendanceRow {
    id: i64,
    meeting_id: i64,
    member_id: i64,
    status: String,
}

/// Set a member's status for a meeting, updating the existing row if there is one.
pub async fn upsert<'e, E>(
    executor: E,
    meeting_id: i64,
    member_id: i64,
    status: AttendanceStatus,
) -> Result<(), AppError>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO attendance (meeting_id, member_id, status) VALUES (?1, ?2, ?3) \
         ON CONFLICT(meeting_id, member_id) DO UPDATE SET status = excluded.status",
    )
    .bind(meeting_id)
    .bind(member_id)
    .bind(status.as_str())
    .execute(executor)
    .await?;
    Ok(())
}

/// Insert a row only if the member has none yet for this meeting.
///
/// Returns whether a row was inserted.
pub async fn insert_if_missing<'e, E>(
    executor: E,
    meeting_id: i64,
    member_id: i64,
    status: AttendanceStatus,
) -> Result<bool, AppError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO attendance (meeting_id, member_id, status) VALUES (?1, ?2, ?3) \
         ON CONFLICT(meeting_id, member_id) DO NOTHING",
    )
    .bind(meeting_id)
    .bind(member_id)
    .bind(status.as_str())
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Attendance rows of a meeting, including rows for since-deleted members.
pub async fn find_for_meeting(pool: &DbPool, meeting_id: i64) -> Result<Vec<Attendance>, AppError> {
    let rows = sqlx::query_as::<_, AttendanceRow>(
        "SELECT id, meeting_id, member_id, status FROM attendance \
         WHERE meeting_id = ?1 ORDER BY member_id",
    )
    .bind(meeting_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| -> Result<Attendance, AppError> {
            Ok(Attendance {
                id: row.id,
                meeting_id: row.meeting_id,
                member_id: row.member_id,
                status: row.status.parse()?,
            })
        })
        .collect()
}
