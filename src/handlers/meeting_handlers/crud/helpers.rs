/// Conversion of raw form input into validated model input.
///
/// This is the boundary where free text becomes typed values: unknown statuses,
/// non-numeric ids and malformed dates are rejected here with `AppError::Validation`.

use std::collections::HashMap;

use chrono::Local;

use crate::errors::AppError;
use crate::models::attendance::AttendanceStatus;
use crate::models::meeting::{parse_meeting_date, parse_quorum, NewMeeting};
use crate::models::motion::{MotionStatus, NewMotion};
use crate::models::statement::NewStatement;

use super::forms::{MeetingForm, MotionForm, StatementForm};

/// Prefix of roll-call form fields: `status_<member_id>=<status>`.
pub const ATTENDANCE_FIELD_PREFIX: &str = "status_";

fn blank_to_none(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parse an optional id field. Blank means no reference.
pub fn parse_optional_id(value: &Option<String>, field: &str) -> Result<Option<i64>, AppError> {
    match blank_to_none(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{field} must be a numeric id, got '{raw}'"))),
    }
}

/// Build a `NewMeeting`. A blank date means "now"; an unparsable one is rejected.
pub fn meeting_from_form(form: &MeetingForm) -> Result<NewMeeting, AppError> {
    let date = match blank_to_none(&form.date) {
        Some(raw) => parse_meeting_date(raw)?,
        None => Local::now().naive_local(),
    };
    let quorum_required = parse_quorum(form.quorum_required.as_deref().unwrap_or(""))?;

    Ok(NewMeeting {
        title: form.title.clone(),
        date,
        meeting_type: form.meeting_type.clone(),
        location: blank_to_none(&form.location).map(str::to_string),
        quorum_required,
    })
}

pub fn motion_from_form(form: &MotionForm) -> Result<NewMotion, AppError> {
    let status = match blank_to_none(&form.status) {
        Some(raw) => raw.parse::<MotionStatus>()?,
        None => MotionStatus::default(),
    };

    Ok(NewMotion {
        text: form.text.clone(),
        proposer_id: parse_optional_id(&form.proposer_id, "Proposer")?,
        seconder_id: parse_optional_id(&form.seconder_id, "Seconder")?,
        status,
        vote_results: blank_to_none(&form.vote_results).map(str::to_string),
        agenda_item_id: parse_optional_id(&form.agenda_item_id, "Agenda item")?,
    })
}

pub fn statement_from_form(form: &StatementForm) -> Result<NewStatement, AppError> {
    Ok(NewStatement {
        speaker_id: parse_optional_id(&form.speaker_id, "Speaker")?,
        content: form.content.clone(),
        agenda_item_id: parse_optional_id(&form.agenda_item_id, "Agenda item")?,
    })
}

/// Extract `status_<id>` fields from a roll-call form. Blank values count as not submitted.
pub fn attendance_from_form(
    fields: &HashMap<String, String>,
) -> Result<HashMap<i64, AttendanceStatus>, AppError> {
    let mut statuses = HashMap::new();
    for (key, value) in fields {
        let Some(id_str) = key.strip_prefix(ATTENDANCE_FIELD_PREFIX) else {
            continue;
        };
        let member_id = id_str
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("Invalid attendance field '{key}'")))?;
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        statuses.insert(member_id, value.parse::<AttendanceStatus>()?);
    }
    Ok(statuses)
}
