/// Form structures for meeting operations.
///
/// Optional fields arrive as empty strings when the user leaves a select or input blank;
/// `helpers` turns those into `None`.

#[derive(serde::Deserialize)]
pub struct MeetingForm {
    pub title: String,
    pub meeting_type: String,
    pub location: Option<String>,
    pub quorum_required: Option<String>,
    pub date: Option<String>,
    pub initial_agenda: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct AgendaForm {
    pub title: String,
}

#[derive(serde::Deserialize)]
pub struct MotionForm {
    pub text: String,
    pub proposer_id: Option<String>,
    pub seconder_id: Option<String>,
    pub status: Option<String>,
    pub vote_results: Option<String>,
    pub agenda_item_id: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct StatementForm {
    pub speaker_id: Option<String>,
    pub content: String,
    pub agenda_item_id: Option<String>,
}
