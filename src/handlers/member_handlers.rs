use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::Store;
use crate::errors::AppError;
use crate::handlers::redirect;
use crate::models::member::{self, Member, NewMember};
use crate::models::role::{self, Role};

#[derive(Serialize)]
pub struct MembersPage {
    pub members: Vec<Member>,
    pub roles: Vec<Role>,
}

/// GET /members: Members plus the role names offered when adding one.
pub async fn list(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let page = MembersPage {
        members: member::find_all(&store.pool).await?,
        roles: role::find_all(&store.pool).await?,
    };
    Ok(HttpResponse::Ok().json(page))
}

/// POST /members/add
pub async fn create(
    store: web::Data<Store>,
    form: web::Form<NewMember>,
) -> Result<HttpResponse, AppError> {
    let id = member::create(&store.pool, &form).await?;
    log::info!("Added member {id}");
    Ok(redirect("/members"))
}

/// POST /members/delete/{id}: Attendance, motions and statements keep the dangling id.
pub async fn delete(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    member::delete(&store.pool, id).await?;
    log::info!("Deleted member {id}");
    Ok(redirect("/members"))
}
