/// Meeting CRUD handlers.
///
/// - `read.rs`: GET live meeting view
/// - `create.rs`: POST new meeting
/// - `update.rs`: POST agenda, roll call, motions, statements, adjourn, deletes
/// - `forms.rs`: form structures for deserialization
/// - `helpers.rs`: form -> model conversion and validation

pub mod forms;
pub mod helpers;
pub mod read;
pub mod create;
pub mod update;

pub use read::detail;
pub use create::create;
pub use update::{
    add_agenda_item, take_attendance, add_motion, add_statement, adjourn,
    delete_meeting, delete_motion, delete_statement,
};
pub use forms::{MeetingForm, AgendaForm, MotionForm, StatementForm};
