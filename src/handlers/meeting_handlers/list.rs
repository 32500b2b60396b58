use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::Store;
use crate::errors::AppError;
use crate::models::meeting::{self, Meeting, MeetingStatus};
use crate::models::setting::{self, AppSettings};

#[derive(Serialize)]
pub struct Dashboard {
    pub settings: AppSettings,
    pub ongoing: Vec<Meeting>,
    pub finished: Vec<Meeting>,
}

/// GET /: Ongoing and finished meetings, newest first.
pub async fn dashboard(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let dashboard = Dashboard {
        settings: setting::load(&store.pool).await?,
        ongoing: meeting::find_by_status(&store.pool, MeetingStatus::Ongoing).await?,
        finished: meeting::find_by_status(&store.pool, MeetingStatus::Finished).await?,
    };
    Ok(HttpResponse::Ok().json(dashboard))
}

/// GET /meetings: Every meeting, newest first.
pub async fn list(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let meetings = meeting::find_all(&store.pool).await?;
    Ok(HttpResponse::Ok().json(meetings))
}
