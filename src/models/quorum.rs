//! Quorum evaluation.
//!
//! Derived on every read from the current attendance rows; never stored on the meeting.

use serde::Serialize;

use crate::models::attendance::{Attendance, AttendanceStatus};
use crate::models::meeting::Meeting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuorumSummary {
    pub present: i64,
    pub required: i64,
    pub met: bool,
}

/// Number of attendance rows marked exactly `Present`.
pub fn present_count(attendance: &[Attendance]) -> i64 {
    attendance
        .iter()
        .filter(|a| a.status == AttendanceStatus::Present)
        .count() as i64
}

/// Quorum is met when at least `quorum_required` members are present.
pub fn quorum_met(meeting: &Meeting, attendance: &[Attendance]) -> bool {
    present_count(attendance) >= meeting.quorum_required
}

pub fn summarize(meeting: &Meeting, attendance: &[Attendance]) -> QuorumSummary {
    let present = present_count(attendance);
    QuorumSummary {
        present,
        required: meeting.quorum_required,
        met: present >= meeting.quorum_required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meeting::MeetingStatus;
    use chrono::NaiveDate;

    fn meeting(quorum_required: i64) -> Meeting {
        Meeting {
            id: 1,
            title: "Board".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            meeting_type: "Regular".to_string(),
            location: None,
            quorum_required,
            status: MeetingStatus::Ongoing,
            ended_at: None,
        }
    }

    fn roll(statuses: &[AttendanceStatus]) -> Vec<Attendance> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, &status)| Attendance {
                id: i as i64 + 1,
                meeting_id: 1,
                member_id: i as i64 + 1,
                status,
            })
            .collect()
    }

    use AttendanceStatus::{Absent, Excused, Present};

    #[test]
    fn zero_quorum_is_always_met() {
        let m = meeting(0);
        assert!(quorum_met(&m, &[]));
        assert!(quorum_met(&m, &roll(&[Absent, Excused])));
        assert!(quorum_met(&m, &roll(&[Present])));
    }

    #[test]
    fn only_present_counts() {
        let m = meeting(2);
        assert!(!quorum_met(&m, &roll(&[Present, Absent, Excused])));
        assert!(quorum_met(&m, &roll(&[Present, Excused, Present])));
    }

    #[test]
    fn met_exactly_at_threshold() {
        let m = meeting(3);
        assert!(!quorum_met(&m, &roll(&[Present, Present])));
        assert!(quorum_met(&m, &roll(&[Present, Present, Present])));
    }

    #[test]
    fn adding_a_present_row_never_unmeets_quorum() {
        let statuses = [Absent, Present, Excused, Present, Absent, Present];
        for required in 0..=4 {
            let m = meeting(required);
            let mut rows = Vec::new();
            let mut previous = quorum_met(&m, &rows);
            for (i, &status) in statuses.iter().enumerate() {
                rows.push(Attendance {
                    id: i as i64,
                    meeting_id: 1,
                    member_id: i as i64,
                    status,
                });
                let current = quorum_met(&m, &rows);
                if status == Present {
                    assert!(current >= previous, "quorum dropped after a Present row");
                }
                previous = current;
            }
        }
    }

    #[test]
    fn summary_matches_predicate() {
        let m = meeting(2);
        let rows = roll(&[Present, Absent, Present]);
        let summary = summarize(&m, &rows);
        assert_eq!(summary, QuorumSummary { present: 2, required: 2, met: true });
        assert_eq!(summary.met, quorum_met(&m, &rows));
    }
}
