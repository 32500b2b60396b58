use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/quorum.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl AppConfig {
    /// Load from the environment (and `.env` if present), falling back to defaults.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(val) => val.parse().unwrap_or_else(|_| {
                log::warn!(
                    "DB_MAX_CONNECTIONS={val:?} is not a number, using {DEFAULT_MAX_CONNECTIONS}"
                );
                DEFAULT_MAX_CONNECTIONS
            }),
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Self {
            database_url,
            bind_addr,
            max_connections,
        }
    }
}
