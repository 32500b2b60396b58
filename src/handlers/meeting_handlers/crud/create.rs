/// Meeting creation.

use actix_web::{web, HttpResponse};

use crate::db::Store;
use crate::errors::AppError;
use crate::handlers::redirect;
use crate::lifecycle;

use super::forms::MeetingForm;
use super::helpers::meeting_from_form;

/// POST /meetings/add: Create a meeting, splitting `initial_agenda` into agenda items.
pub async fn create(
    store: web::Data<Store>,
    form: web::Form<MeetingForm>,
) -> Result<HttpResponse, AppError> {
    let new_meeting = meeting_from_form(&form)?;
    lifecycle::create_meeting(&store, &new_meeting, form.initial_agenda.as_deref()).await?;
    Ok(redirect("/meetings"))
}
