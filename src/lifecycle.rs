//! Meeting lifecycle: Ongoing -> Finished, and every write that attaches records to a meeting.
//!
//! Each mutation holds the meeting's lock from the existence check to the commit, so two
//! requests against the same meeting never interleave. Writes to a finished meeting are
//! rejected here; the record store itself does not enforce it.

use std::collections::HashMap;

use chrono::{Local, NaiveDateTime};
use crate::db::{MeetingGuard, Store};
use crate::errors::AppError;
use crate::models::agenda_item::{self, split_agenda_text};
use crate::models::attendance::{self, AttendanceStatus};
use crate::models::meeting::{self, Meeting, NewMeeting};
use crate::models::member;
use crate::models::motion::{self, NewMotion};
use crate::models::statement::{self, NewStatement};

/// Status given to a member with no prior attendance row and nothing submitted.
pub const ROLL_CALL_DEFAULT: AttendanceStatus = AttendanceStatus::Absent;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Lock the meeting and load it, failing with `NotFound` if it does not exist.
async fn lock_meeting(store: &Store, meeting_id: i64) -> Result<(MeetingGuard, Meeting), AppError> {
    let guard = store.locks.acquire(meeting_id).await;
    let meeting = meeting::find_by_id(&store.pool, meeting_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((guard, meeting))
}

/// As `lock_meeting`, but also rejects finished meetings.
async fn lock_ongoing(store: &Store, meeting_id: i64) -> Result<(MeetingGuard, Meeting), AppError> {
    let (guard, meeting) = lock_meeting(store, meeting_id).await?;
    if meeting.is_finished() {
        log::warn!("Rejected write to finished meeting {meeting_id}");
        return Err(AppError::MeetingFinished(meeting_id));
    }
    Ok((guard, meeting))
}

async fn check_agenda_link(store: &Store, agenda_item_id: Option<i64>) -> Result<(), AppError> {
    if let Some(id) = agenda_item_id {
        if agenda_item::find_by_id(&store.pool, id).await?.is_none() {
            return Err(AppError::Validation(format!("Agenda item {id} does not exist")));
        }
    }
    Ok(())
}

/// Create an ongoing meeting, plus one agenda item per non-blank line of `initial_agenda`.
pub async fn create_meeting(
    store: &Store,
    new_meeting: &NewMeeting,
    initial_agenda: Option<&str>,
) -> Result<i64, AppError> {
    let titles = initial_agenda.map(split_agenda_text).unwrap_or_default();

    let mut tx = store.pool.begin().await?;
    let meeting_id = meeting::insert(&mut *tx, new_meeting).await?;
    agenda_item::insert_all(&mut *tx, meeting_id, &titles).await?;
    tx.commit().await?;

    log::info!(
        "Created meeting {meeting_id} '{}' with {} agenda item(s)",
        new_meeting.title.trim(),
        titles.len()
    );
    Ok(meeting_id)
}

/// Delete a meeting and everything it owns.
pub async fn delete_meeting(store: &Store, meeting_id: i64) -> Result<(), AppError> {
    let _guard = store.locks.acquire(meeting_id).await;
    if !meeting::delete(&store.pool, meeting_id).await? {
        return Err(AppError::NotFound);
    }
    log::info!("Deleted meeting {meeting_id}");
    Ok(())
}

/// Finish a meeting. Adjourning an already finished meeting returns it unchanged.
pub async fn adjourn(store: &Store, meeting_id: i64) -> Result<Meeting, AppError> {
    let (_guard, meeting) = lock_meeting(store, meeting_id).await?;
    if meeting.is_finished() {
        log::debug!("Meeting {meeting_id} already adjourned");
        return Ok(meeting);
    }

    // ended_at never precedes the scheduled date, even for meetings dated in the future.
    let ended_at = now().max(meeting.date);
    meeting::mark_finished(&store.pool, meeting_id, ended_at).await?;
    log::info!("Adjourned meeting {meeting_id}");

    meeting::find_by_id(&store.pool, meeting_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Append one agenda item.
pub async fn create_agenda_item(store: &Store, meeting_id: i64, title: &str) -> Result<i64, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Agenda item title is required".to_string()));
    }
    let (_guard, _) = lock_ongoing(store, meeting_id).await?;

    let mut conn = store.pool.acquire().await?;
    let ids = agenda_item::insert_all(&mut *conn, meeting_id, &[title.to_string()]).await?;
    Ok(ids[0])
}

/// Append one agenda item per non-blank line of `text`, in order.
pub async fn create_agenda_items(store: &Store, meeting_id: i64, text: &str) -> Result<Vec<i64>, AppError> {
    let titles = split_agenda_text(text);
    if titles.is_empty() {
        return Err(AppError::Validation("Agenda text contains no items".to_string()));
    }
    let (_guard, _) = lock_ongoing(store, meeting_id).await?;

    let mut tx = store.pool.begin().await?;
    let ids = agenda_item::insert_all(&mut *tx, meeting_id, &titles).await?;
    tx.commit().await?;
    Ok(ids)
}

/// Set one member's attendance for a meeting.
pub async fn set_attendance(
    store: &Store,
    meeting_id: i64,
    member_id: i64,
    status: AttendanceStatus,
) -> Result<(), AppError> {
    let (_guard, _) = lock_ongoing(store, meeting_id).await?;
    if member::find_by_id(&store.pool, member_id).await?.is_none() {
        return Err(AppError::NotFound);
    }
    attendance::upsert(&store.pool, meeting_id, member_id, status).await
}

/// Roll call over every member of the organization, in one transaction.
///
/// A submitted status overwrites any existing row. A member left out of `status_by_member`
/// keeps an existing row, or is recorded as `ROLL_CALL_DEFAULT` if there is none.
/// Entries for ids that are not members are ignored.
pub async fn record_attendance(
    store: &Store,
    meeting_id: i64,
    status_by_member: &HashMap<i64, AttendanceStatus>,
) -> Result<(), AppError> {
    let (_guard, _) = lock_ongoing(store, meeting_id).await?;
    let members = member::find_all(&store.pool).await?;

    let mut tx = store.pool.begin().await?;
    let mut defaulted = 0;
    for m in &members {
        match status_by_member.get(&m.id) {
            Some(&status) => attendance::upsert(&mut *tx, meeting_id, m.id, status).await?,
            None => {
                if attendance::insert_if_missing(&mut *tx, meeting_id, m.id, ROLL_CALL_DEFAULT).await? {
                    defaulted += 1;
                }
            }
        }
    }
    tx.commit().await?;

    let unknown = status_by_member
        .keys()
        .filter(|id| !members.iter().any(|m| m.id == **id))
        .count();
    if unknown > 0 {
        log::warn!("Roll call for meeting {meeting_id} ignored {unknown} unknown member id(s)");
    }
    log::info!(
        "Roll call for meeting {meeting_id}: {} member(s), {defaulted} defaulted to {ROLL_CALL_DEFAULT}",
        members.len()
    );
    Ok(())
}

pub async fn record_motion(store: &Store, meeting_id: i64, new_motion: &NewMotion) -> Result<i64, AppError> {
    let (_guard, _) = lock_ongoing(store, meeting_id).await?;
    check_agenda_link(store, new_motion.agenda_item_id).await?;
    motion::insert(&store.pool, meeting_id, new_motion).await
}

/// Append a statement stamped with the current time.
pub async fn record_statement(
    store: &Store,
    meeting_id: i64,
    new_statement: &NewStatement,
) -> Result<i64, AppError> {
    let (_guard, _) = lock_ongoing(store, meeting_id).await?;
    check_agenda_link(store, new_statement.agenda_item_id).await?;
    statement::insert(&store.pool, meeting_id, new_statement, now()).await
}

/// Delete a motion. Returns the id of the meeting it belonged to.
pub async fn delete_motion(store: &Store, motion_id: i64) -> Result<i64, AppError> {
    let found = motion::find_by_id(&store.pool, motion_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let (_guard, _) = lock_ongoing(store, found.meeting_id).await?;
    if !motion::delete(&store.pool, motion_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(found.meeting_id)
}

/// Delete a statement. Returns the id of the meeting it belonged to.
pub async fn delete_statement(store: &Store, statement_id: i64) -> Result<i64, AppError> {
    let found = statement::find_by_id(&store.pool, statement_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let (_guard, _) = lock_ongoing(store, found.meeting_id).await?;
    if !statement::delete(&store.pool, statement_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(found.meeting_id)
}
