use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::Store;
use crate::errors::AppError;
use crate::handlers::redirect;
use crate::models::role::{self, Role};
use crate::models::setting::{self, AppSettings, SettingsUpdate};

#[derive(Serialize)]
pub struct SettingsPage {
    pub settings: AppSettings,
    pub roles: Vec<Role>,
}

#[derive(Deserialize)]
pub struct RoleForm {
    pub role_name: String,
}

/// GET /settings
pub async fn list(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let page = SettingsPage {
        settings: setting::load(&store.pool).await?,
        roles: role::find_all(&store.pool).await?,
    };
    Ok(HttpResponse::Ok().json(page))
}

/// POST /settings/update_app: Org name, theme colour, and the logo's stored filename.
pub async fn save(
    store: web::Data<Store>,
    form: web::Form<SettingsUpdate>,
) -> Result<HttpResponse, AppError> {
    let changed = setting::save(&store.pool, &form).await?;
    if !changed.is_empty() {
        log::info!("Updated settings: {}", changed.join(", "));
    }
    Ok(redirect("/settings"))
}

/// POST /settings/add_role: A blank or duplicate name is ignored.
pub async fn add_role(
    store: web::Data<Store>,
    form: web::Form<RoleForm>,
) -> Result<HttpResponse, AppError> {
    if let Some(id) = role::create(&store.pool, &form.role_name).await? {
        log::info!("Added role {id} '{}'", form.role_name.trim());
    }
    Ok(redirect("/settings"))
}

/// POST /settings/delete_role/{id}: A missing id is ignored.
pub async fn delete_role(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if role::delete(&store.pool, id).await? {
        log::info!("Deleted role {id}");
    }
    Ok(redirect("/settings"))
}
