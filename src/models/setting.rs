use serde::{Deserialize, Serialize};

use crate::db::DbPool;
use crate::errors::AppError;

pub const ORG_NAME: &str = "org_name";
pub const THEME_COLOR: &str = "theme_color";
pub const ORG_LOGO: &str = "org_logo";
pub const GITHUB_LINK: &str = "github_link";

pub const DEFAULT_ORG_NAME: &str = "My Organization";
pub const DEFAULT_THEME_COLOR: &str = "#0d6efd";
pub const DEFAULT_GITHUB_LINK: &str = "https://github.com/felexion/quorum";

/// Branding/display settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSettings {
    pub org_name: String,
    pub theme_color: String,
    /// Filename of the uploaded logo, if any. The file itself lives outside the store.
    pub org_logo: Option<String>,
    pub github_link: String,
}

/// Form input for the settings page. Empty fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub org_logo: Option<String>,
}

/// Raw lookup. `None` when the key was never written.
pub async fn get(pool: &DbPool, key: &str) -> Result<Option<String>, AppError> {
    let value: Option<Option<String>> =
        sqlx::query_scalar("SELECT value FROM app_settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(pool)
            .await?;
    Ok(value.flatten())
}

/// Get a single setting's value by key, returning a default if not found.
pub async fn get_value(pool: &DbPool, key: &str, default: &str) -> Result<String, AppError> {
    Ok(get(pool, key).await?.unwrap_or_else(|| default.to_string()))
}

/// Insert or overwrite a setting.
pub async fn upsert(pool: &DbPool, key: &str, value: &str) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO app_settings (key, value) VALUES (?1, ?2) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn load(pool: &DbPool) -> Result<AppSettings, AppError> {
    Ok(AppSettings {
        org_name: get_value(pool, ORG_NAME, DEFAULT_ORG_NAME).await?,
        theme_color: get_value(pool, THEME_COLOR, DEFAULT_THEME_COLOR).await?,
        org_logo: get(pool, ORG_LOGO).await?,
        github_link: get_value(pool, GITHUB_LINK, DEFAULT_GITHUB_LINK).await?,
    })
}

/// Apply a settings form in one transaction. Returns the keys that were written.
pub async fn save(pool: &DbPool, update: &SettingsUpdate) -> Result<Vec<&'static str>, AppError> {
    let fields = [
        (ORG_NAME, &update.org_name),
        (THEME_COLOR, &update.theme_color),
        (ORG_LOGO, &update.org_logo),
    ];

    let mut tx = pool.begin().await?;
    let mut changed = Vec::new();
    for (key, value) in fields {
        let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };
        sqlx::query(
            "INSERT INTO app_settings (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await?;
        changed.push(key);
    }
    tx.commit().await?;

    Ok(changed)
}
