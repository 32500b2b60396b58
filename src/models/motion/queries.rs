use crate::db::DbPool;
use crate::errors::AppError;
use super::types::*;

#[derive(sqlx::FromRow)]
struct MotionRow {
    id: i64,
    meeting_id: i64,
    agenda_item_id: Option<i64>,
    proposer_id: Option<i64>,
    seconder_id: Option<i64>,
    text: String,
    status: String,
    vote_results: Option<String>,
}

impl TryFrom<MotionRow> for Motion {
    type Error = AppError;

    fn try_from(row: MotionRow) -> Result<Self, Self::Error> {
        Ok(Motion {
            id: row.id,
            meeting_id: row.meeting_id,
            agenda_item_id: row.agenda_item_id,
            proposer_id: row.proposer_id,
            seconder_id: row.seconder_id,
            text: row.text,
            status: row.status.parse()?,
            vote_results: row.vote_results,
        })
    }
}

const MOTION_SELECT: &str = "\
SELECT id, meeting_id, agenda_item_id, proposer_id, seconder_id, text, status, vote_results \
FROM motions";

pub async fn insert(pool: &DbPool, meeting_id: i64, motion: &NewMotion) -> Result<i64, AppError> {
    let text = motion.text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Motion text is required".to_string()));
    }
    let vote_results = motion
        .vote_results
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let id = sqlx::query(
        "INSERT INTO motions \
             (meeting_id, agenda_item_id, proposer_id, seconder_id, text, status, vote_results) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(meeting_id)
    .bind(motion.agenda_item_id)
    .bind(motion.proposer_id)
    .bind(motion.seconder_id)
    .bind(text)
    .bind(motion.status.as_str())
    .bind(vote_results)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Motion>, AppError> {
    let sql = format!("{MOTION_SELECT} WHERE id = ?1");
    let row = sqlx::query_as::<_, MotionRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Motion::try_from).transpose()
}

/// Motions of a meeting in the order they were raised.
pub async fn find_for_meeting(pool: &DbPool, meeting_id: i64) -> Result<Vec<Motion>, AppError> {
    let sql = format!("{MOTION_SELECT} WHERE meeting_id = ?1 ORDER BY id");
    let rows = sqlx::query_as::<_, MotionRow>(&sql)
        .bind(meeting_id)
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(Motion::try_from).collect()
}

pub async fn delete(pool: &DbPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM motions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
