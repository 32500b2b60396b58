use actix_web::{web, HttpResponse};

use crate::db::Store;
use crate::errors::AppError;
use crate::models::report;

/// GET /meeting/{id}/report: Records grouped by agenda item, statements oldest first.
pub async fn report(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let report = report::assemble_report(&store.pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(report))
}
