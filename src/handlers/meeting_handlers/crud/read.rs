/// Meeting detail read operations.

use actix_web::{web, HttpResponse};

use crate::db::Store;
use crate::errors::AppError;
use crate::models::report;

/// GET /meeting/{id}: Live meeting view.
///
/// Attendance map, quorum, agenda items, motions, and statements (newest first).
pub async fn detail(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let view = report::load_meeting_view(&store.pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}
