pub mod meeting_handlers;
pub mod member_handlers;
pub mod settings_handlers;

use actix_web::{web, HttpResponse};

/// 303 redirect after a successful form POST.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Register every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Dashboard
        .route("/", web::get().to(meeting_handlers::dashboard))
        // Meetings
        .route("/meetings", web::get().to(meeting_handlers::list))
        .route("/meetings/add", web::post().to(meeting_handlers::create))
        .route("/meetings/delete/{id}", web::post().to(meeting_handlers::delete_meeting))
        // Live meeting actions
        .route("/meeting/{id}", web::get().to(meeting_handlers::detail))
        .route("/meeting/{id}/add_agenda_item", web::post().to(meeting_handlers::add_agenda_item))
        .route("/meeting/{id}/attendance", web::post().to(meeting_handlers::take_attendance))
        .route("/meeting/{id}/motion", web::post().to(meeting_handlers::add_motion))
        .route("/meeting/{id}/statement", web::post().to(meeting_handlers::add_statement))
        .route("/meeting/{id}/adjourn", web::post().to(meeting_handlers::adjourn))
        .route("/meeting/{id}/report", web::get().to(meeting_handlers::report))
        .route("/motion/delete/{id}", web::post().to(meeting_handlers::delete_motion))
        .route("/statement/delete/{id}", web::post().to(meeting_handlers::delete_statement))
        // Members
        .route("/members", web::get().to(member_handlers::list))
        .route("/members/add", web::post().to(member_handlers::create))
        .route("/members/delete/{id}", web::post().to(member_handlers::delete))
        // Settings and roles
        .route("/settings", web::get().to(settings_handlers::list))
        .route("/settings/update_app", web::post().to(settings_handlers::save))
        .route("/settings/add_role", web::post().to(settings_handlers::add_role))
        .route("/settings/delete_role/{id}", web::post().to(settings_handlers::delete_role));
}
