use std::collections::HashMap;

use crate::db::DbPool;
use crate::errors::AppError;
use super::types::*;

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Insert a member. First and last name are required; blank role labels are stored as NULL.
pub async fn create(pool: &DbPool, member: &NewMember) -> Result<i64, AppError> {
    let first_name = member.first_name.trim();
    let last_name = member.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AppError::Validation("First and last name are required".to_string()));
    }

    let id = sqlx::query(
        "INSERT INTO members (first_name, last_name, primary_role, secondary_role) \
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(non_blank(&member.primary_role))
    .bind(non_blank(&member.secondary_role))
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// All members, in insertion order.
pub async fn find_all(pool: &DbPool) -> Result<Vec<Member>, AppError> {
    let members = sqlx::query_as::<_, Member>(
        "SELECT id, first_name, last_name, primary_role, secondary_role \
         FROM members ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(members)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Member>, AppError> {
    let member = sqlx::query_as::<_, Member>(
        "SELECT id, first_name, last_name, primary_role, secondary_role \
         FROM members WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(member)
}

/// Hard delete. Attendance, motions and statements that reference the member are left as-is.
pub async fn delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM members WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Resolve an optional member reference, tolerating deleted members.
pub fn display_name(names: &HashMap<i64, String>, id: Option<i64>) -> Option<String> {
    id.map(|id| {
        names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_MEMBER.to_string())
    })
}
