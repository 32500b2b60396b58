use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Format produced by `<input type="datetime-local">`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingStatus {
    Ongoing,
    Finished,
}

impl MeetingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingStatus::Ongoing => "Ongoing",
            MeetingStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ongoing" => Ok(MeetingStatus::Ongoing),
            "Finished" => Ok(MeetingStatus::Finished),
            other => Err(AppError::Validation(format!("Unknown meeting status '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    pub date: NaiveDateTime,
    pub meeting_type: String,
    pub location: Option<String>,
    pub quorum_required: i64,
    pub status: MeetingStatus,
    pub ended_at: Option<NaiveDateTime>,
}

impl Meeting {
    pub fn is_finished(&self) -> bool {
        self.status == MeetingStatus::Finished
    }
}

/// Validated input for creating a meeting.
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub title: String,
    pub date: NaiveDateTime,
    pub meeting_type: String,
    pub location: Option<String>,
    pub quorum_required: i64,
}

/// Parse a meeting date as submitted by the browser.
pub fn parse_meeting_date(value: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(value.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| AppError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DDTHH:MM")))
}

/// Parse the quorum field. Empty means no quorum requirement.
pub fn parse_quorum(value: &str) -> Result<i64, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(AppError::Validation(format!(
            "Quorum must be a non-negative whole number, got '{value}'"
        ))),
    }
}
