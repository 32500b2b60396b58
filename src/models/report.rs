//! Read-only assembly of a meeting's records: the live view and the printable report.
//!
//! The live view lists statements newest first; the report lists them oldest first
//! and groups motions and statements under the agenda item they are linked to.

use std::collections::HashMap;

use serde::Serialize;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::agenda_item::{self, AgendaItem};
use crate::models::attendance::{self, AttendanceStatus};
use crate::models::meeting::{self, Meeting};
use crate::models::member::{self, Member};
use crate::models::motion::{self, Motion};
use crate::models::quorum::{self, QuorumSummary};
use crate::models::statement::{self, Chronology, Statement};

#[derive(Debug, Clone, Serialize)]
pub struct MotionLine {
    #[serde(flatten)]
    pub motion: Motion,
    pub proposer_name: Option<String>,
    pub seconder_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementLine {
    #[serde(flatten)]
    pub statement: Statement,
    pub speaker_name: Option<String>,
}

/// One agenda item with everything linked to it.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaSection {
    pub item: AgendaItem,
    pub motions: Vec<MotionLine>,
    pub statements: Vec<StatementLine>,
}

/// Everything the live meeting page shows.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingView {
    pub meeting: Meeting,
    pub members: Vec<Member>,
    pub attendance: HashMap<i64, AttendanceStatus>,
    pub quorum: QuorumSummary,
    pub agenda_items: Vec<AgendaItem>,
    pub motions: Vec<MotionLine>,
    pub statements: Vec<StatementLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeetingReport {
    pub meeting: Meeting,
    pub members: Vec<Member>,
    pub attendance: HashMap<i64, AttendanceStatus>,
    pub quorum: QuorumSummary,
    pub sections: Vec<AgendaSection>,
    pub general_motions: Vec<MotionLine>,
    pub general_statements: Vec<StatementLine>,
}

/// Result of bucketing motions and statements by agenda item.
#[derive(Debug, Clone, Default)]
pub struct Grouped {
    pub sections: Vec<AgendaSection>,
    pub general_motions: Vec<MotionLine>,
    pub general_statements: Vec<StatementLine>,
}

pub fn motion_lines(motions: Vec<Motion>, names: &HashMap<i64, String>) -> Vec<MotionLine> {
    motions
        .into_iter()
        .map(|motion| MotionLine {
            proposer_name: member::display_name(names, motion.proposer_id),
            seconder_name: member::display_name(names, motion.seconder_id),
            motion,
        })
        .collect()
}

pub fn statement_lines(
    statements: Vec<Statement>,
    names: &HashMap<i64, String>,
) -> Vec<StatementLine> {
    statements
        .into_iter()
        .map(|statement| StatementLine {
            speaker_name: member::display_name(names, statement.speaker_id),
            statement,
        })
        .collect()
}

/// Bucket motions and statements under their agenda item, keeping input order within
/// each bucket. Anything not linked to one of `items` lands in the general buckets.
pub fn group_by_agenda(
    items: Vec<AgendaItem>,
    motions: Vec<MotionLine>,
    statements: Vec<StatementLine>,
) -> Grouped {
    let index: HashMap<i64, usize> = items.iter().enumerate().map(|(i, item)| (item.id, i)).collect();
    let mut grouped = Grouped {
        sections: items
            .into_iter()
            .map(|item| AgendaSection {
                item,
                motions: Vec::new(),
                statements: Vec::new(),
            })
            .collect(),
        ..Grouped::default()
    };

    for line in motions {
        match line.motion.agenda_item_id.and_then(|id| index.get(&id)) {
            Some(&i) => grouped.sections[i].motions.push(line),
            None => grouped.general_motions.push(line),
        }
    }
    for line in statements {
        match line.statement.agenda_item_id.and_then(|id| index.get(&id)) {
            Some(&i) => grouped.sections[i].statements.push(line),
            None => grouped.general_statements.push(line),
        }
    }

    grouped
}

struct Snapshot {
    meeting: Meeting,
    members: Vec<Member>,
    names: HashMap<i64, String>,
    attendance: HashMap<i64, AttendanceStatus>,
    quorum: QuorumSummary,
    agenda_items: Vec<AgendaItem>,
    motions: Vec<Motion>,
    statements: Vec<Statement>,
}

async fn load_snapshot(
    pool: &DbPool,
    meeting_id: i64,
    order: Chronology,
) -> Result<Snapshot, AppError> {
    let meeting = meeting::find_by_id(pool, meeting_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let members = member::find_all(pool).await?;
    let names = member::name_map(&members);
    let records = attendance::find_for_meeting(pool, meeting_id).await?;
    let quorum = quorum::summarize(&meeting, &records);

    Ok(Snapshot {
        attendance: attendance::attendance_map(&records),
        quorum,
        agenda_items: agenda_item::find_for_meeting(pool, meeting_id).await?,
        motions: motion::find_for_meeting(pool, meeting_id).await?,
        statements: statement::find_for_meeting(pool, meeting_id, order).await?,
        meeting,
        members,
        names,
    })
}

/// Live meeting page: flat lists, statements newest first.
pub async fn load_meeting_view(pool: &DbPool, meeting_id: i64) -> Result<MeetingView, AppError> {
    let snap = load_snapshot(pool, meeting_id, Chronology::NewestFirst).await?;
    Ok(MeetingView {
        motions: motion_lines(snap.motions, &snap.names),
        statements: statement_lines(snap.statements, &snap.names),
        meeting: snap.meeting,
        members: snap.members,
        attendance: snap.attendance,
        quorum: snap.quorum,
        agenda_items: snap.agenda_items,
    })
}

/// Report: grouped by agenda item, statements oldest first.
pub async fn assemble_report(pool: &DbPool, meeting_id: i64) -> Result<MeetingReport, AppError> {
    let snap = load_snapshot(pool, meeting_id, Chronology::OldestFirst).await?;
    let grouped = group_by_agenda(
        snap.agenda_items,
        motion_lines(snap.motions, &snap.names),
        statement_lines(snap.statements, &snap.names),
    );
    Ok(MeetingReport {
        meeting: snap.meeting,
        members: snap.members,
        attendance: snap.attendance,
        quorum: snap.quorum,
        sections: grouped.sections,
        general_motions: grouped.general_motions,
        general_statements: grouped.general_statements,
    })
}
