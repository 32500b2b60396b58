/// Meeting mutation operations.
///
/// Handles POST requests that attach records to an ongoing meeting and the
/// adjourn transition. Each redirects back to the meeting page on success.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::db::Store;
use crate::errors::AppError;
use crate::handlers::redirect;
use crate::lifecycle;

use super::forms::{AgendaForm, MotionForm, StatementForm};
use super::helpers::{attendance_from_form, motion_from_form, statement_from_form};

fn meeting_location(meeting_id: i64) -> String {
    format!("/meeting/{meeting_id}")
}

// ---------------------------------------------------------------------------
// POST: Agenda
// ---------------------------------------------------------------------------

/// POST /meeting/{id}/add_agenda_item: Add one item, or one per line of a pasted block.
pub async fn add_agenda_item(
    store: web::Data<Store>,
    path: web::Path<i64>,
    form: web::Form<AgendaForm>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();
    if form.title.contains('\n') {
        lifecycle::create_agenda_items(&store, meeting_id, &form.title).await?;
    } else {
        lifecycle::create_agenda_item(&store, meeting_id, &form.title).await?;
    }
    Ok(redirect(&meeting_location(meeting_id)))
}

// ---------------------------------------------------------------------------
// POST: Roll call
// ---------------------------------------------------------------------------

/// POST /meeting/{id}/attendance: Roll call, one `status_<member_id>` field per member.
pub async fn take_attendance(
    store: web::Data<Store>,
    path: web::Path<i64>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();
    let statuses = attendance_from_form(&form)?;
    lifecycle::record_attendance(&store, meeting_id, &statuses).await?;
    Ok(redirect(&meeting_location(meeting_id)))
}

// ---------------------------------------------------------------------------
// POST: Motions and statements
// ---------------------------------------------------------------------------

/// POST /meeting/{id}/motion
pub async fn add_motion(
    store: web::Data<Store>,
    path: web::Path<i64>,
    form: web::Form<MotionForm>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();
    let motion = motion_from_form(&form)?;
    lifecycle::record_motion(&store, meeting_id, &motion).await?;
    Ok(redirect(&meeting_location(meeting_id)))
}

/// POST /meeting/{id}/statement
pub async fn add_statement(
    store: web::Data<Store>,
    path: web::Path<i64>,
    form: web::Form<StatementForm>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();
    let statement = statement_from_form(&form)?;
    lifecycle::record_statement(&store, meeting_id, &statement).await?;
    Ok(redirect(&meeting_location(meeting_id)))
}

// ---------------------------------------------------------------------------
// POST: Lifecycle transition
// ---------------------------------------------------------------------------

/// POST /meeting/{id}/adjourn: Finish the meeting and return to the meetings list.
pub async fn adjourn(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    lifecycle::adjourn(&store, path.into_inner()).await?;
    Ok(redirect("/meetings"))
}

// ---------------------------------------------------------------------------
// POST: Deletes
// ---------------------------------------------------------------------------

/// POST /meetings/delete/{id}
pub async fn delete_meeting(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    lifecycle::delete_meeting(&store, path.into_inner()).await?;
    Ok(redirect("/meetings"))
}

/// POST /motion/delete/{id}: Back to the meeting the motion belonged to.
pub async fn delete_motion(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = lifecycle::delete_motion(&store, path.into_inner()).await?;
    Ok(redirect(&meeting_location(meeting_id)))
}

/// POST /statement/delete/{id}: Back to the meeting the statement belonged to.
pub async fn delete_statement(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = lifecycle::delete_statement(&store, path.into_inner()).await?;
    Ok(redirect(&meeting_location(meeting_id)))
}
