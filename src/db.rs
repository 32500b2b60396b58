use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::sync::OwnedMutexGuard;

pub type DbPool = SqlitePool;

pub const MIGRATIONS: &str = include_str!("schema.sql");

/// Open a pool against `database_url`, creating the file if needed.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// One async mutex per meeting id. Mutations on the same meeting run one at a time.
///
/// Entries live only while someone holds or waits for the lock; the last
/// `MeetingGuard` to drop removes its entry.
#[derive(Clone, Default)]
pub struct MeetingLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>>>,
}

/// Exclusive access to one meeting. Releases the lock and prunes the map on drop.
pub struct MeetingGuard {
    meeting_id: i64,
    locks: MeetingLocks,
    lock: Arc<tokio::sync::Mutex<()>>,
    _held: OwnedMutexGuard<()>,
}

impl MeetingLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `meeting_id`. Released when the guard drops.
    pub async fn acquire(&self, meeting_id: i64) -> MeetingGuard {
        let lock = {
            let mut map = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            map.entry(meeting_id).or_default().clone()
        };
        let held = lock.clone().lock_owned().await;
        MeetingGuard {
            meeting_id,
            locks: self.clone(),
            lock,
            _held: held,
        }
    }

    /// Number of meetings with a live lock entry.
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for MeetingGuard {
    fn drop(&mut self) {
        let mut map = self.locks.locks.lock().unwrap_or_else(|e| e.into_inner());
        // References held by the map, `self.lock` and `self._held`. Any more are waiters.
        let idle = map
            .get(&self.meeting_id)
            .is_some_and(|entry| Arc::ptr_eq(entry, &self.lock) && Arc::strong_count(entry) == 3);
        if idle {
            map.remove(&self.meeting_id);
        }
    }
}

/// Explicit application context: the record store plus the per-meeting write locks.
///
/// Opened once at startup and passed to every operation; closed at shutdown.
#[derive(Clone)]
pub struct Store {
    pub pool: DbPool,
    pub locks: MeetingLocks,
}

impl Store {
    /// Connect, apply the schema, and return a ready store.
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = init_pool(database_url, max_connections).await?;
        run_migrations(&pool).await?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool. The schema must already be applied.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            pool,
            locks: MeetingLocks::new(),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        log::info!("Database pool closed");
    }
}
