use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionStatus {
    #[default]
    Pending,
    Passed,
    Failed,
}

impl MotionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionStatus::Pending => "Pending",
            MotionStatus::Passed => "Passed",
            MotionStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for MotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(MotionStatus::Pending),
            "Passed" => Ok(MotionStatus::Passed),
            "Failed" => Ok(MotionStatus::Failed),
            other => Err(AppError::Validation(format!("Unknown motion status '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Motion {
    pub id: i64,
    pub meeting_id: i64,
    pub agenda_item_id: Option<i64>,
    pub proposer_id: Option<i64>,
    pub seconder_id: Option<i64>,
    pub text: String,
    pub status: MotionStatus,
    /// Free-text tally, e.g. "7 for, 2 against".
    pub vote_results: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewMotion {
    pub text: String,
    pub proposer_id: Option<i64>,
    pub seconder_id: Option<i64>,
    pub status: MotionStatus,
    pub vote_results: Option<String>,
    pub agenda_item_id: Option<i64>,
}
