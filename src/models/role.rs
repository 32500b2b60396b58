use serde::Serialize;

use crate::db::DbPool;
use crate::errors::AppError;

/// Advisory role label, used to populate member role selection lists.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// All roles, alphabetically.
pub async fn find_all(pool: &DbPool) -> Result<Vec<Role>, AppError> {
    let roles = sqlx::query_as::<_, Role>("SELECT id, name FROM roles ORDER BY name, id")
        .fetch_all(pool)
        .await?;
    Ok(roles)
}

/// Add a role unless the name is blank or already taken.
///
/// Returns the new id, or `None` when nothing was inserted.
pub async fn create(pool: &DbPool, name: &str) -> Result<Option<i64>, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let result = sqlx::query("INSERT INTO roles (name) VALUES (?1) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        log::debug!("Role '{name}' already exists");
        return Ok(None);
    }
    Ok(Some(result.last_insert_rowid()))
}

/// Delete a role by id. Returns whether a row was removed; a missing id is not an error.
pub async fn delete(pool: &DbPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM roles WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
