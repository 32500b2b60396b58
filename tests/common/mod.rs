//! Shared test infrastructure.
//!
//! Every test gets its own SQLite file inside a `TempDir`, with the schema applied.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use quorum::db::{DbPool, Store};
use quorum::lifecycle;
use quorum::models::meeting::NewMeeting;
use quorum::models::member::{self, NewMember};

/// A fresh database. The `TempDir` must outlive the store.
pub struct TestDb {
    _dir: TempDir,
    store: Store,
}

impl TestDb {
    pub fn pool(&self) -> &DbPool {
        &self.store.pool
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

pub async fn setup_test_db() -> TestDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let store = Store::open(&url, 4).await.expect("Failed to open test store");
    TestDb { _dir: dir, store }
}

pub fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(h, min, 0))
        .expect("valid date")
}

pub fn new_meeting(title: &str, quorum_required: i64) -> NewMeeting {
    NewMeeting {
        title: title.to_string(),
        date: date(2026, 3, 1, 18, 0),
        meeting_type: "Regular".to_string(),
        location: Some("Town Hall".to_string()),
        quorum_required,
    }
}

pub async fn create_meeting(store: &Store, title: &str, quorum_required: i64) -> i64 {
    lifecycle::create_meeting(store, &new_meeting(title, quorum_required), None)
        .await
        .expect("create meeting")
}

pub async fn create_member(pool: &DbPool, first: &str, last: &str) -> i64 {
    member::create(
        pool,
        &NewMember {
            first_name: first.to_string(),
            last_name: last.to_string(),
            primary_role: None,
            secondary_role: None,
        },
    )
    .await
    .expect("create member")
}

pub async fn count_rows(pool: &DbPool, table: &str, meeting_id: i64) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table} WHERE meeting_id = ?1");
    sqlx::query_scalar(&sql)
        .bind(meeting_id)
        .fetch_one(pool)
        .await
        .expect("count rows")
}
