mod common;

use std::collections::HashMap;

use quorum::errors::AppError;
use quorum::lifecycle;
use quorum::models::attendance::{self, AttendanceStatus};
use quorum::models::meeting::{self, MeetingStatus};
use quorum::models::quorum::{quorum_met, summarize};
use quorum::models::report;

use common::*;

async fn is_met(db: &TestDb, meeting_id: i64) -> bool {
    let found = meeting::find_by_id(db.pool(), meeting_id).await.unwrap().unwrap();
    let records = attendance::find_for_meeting(db.pool(), meeting_id).await.unwrap();
    quorum_met(&found, &records)
}

#[tokio::test]
async fn test_meeting_reaches_quorum_then_adjourns() {
    let db = setup_test_db().await;
    let alice = create_member(db.pool(), "Alice", "Smith").await;
    let bob = create_member(db.pool(), "Bob", "Jones").await;
    let carol = create_member(db.pool(), "Carol", "White").await;
    let id = create_meeting(db.store(), "Board Meeting", 2).await;

    // No roll call yet.
    assert!(!is_met(&db, id).await);

    lifecycle::record_attendance(
        db.store(),
        id,
        &HashMap::from([(alice, AttendanceStatus::Present), (bob, AttendanceStatus::Excused)]),
    )
    .await
    .unwrap();
    assert!(!is_met(&db, id).await, "excused members do not count");

    lifecycle::set_attendance(db.store(), id, carol, AttendanceStatus::Present).await.unwrap();
    assert!(is_met(&db, id).await);

    let view = report::load_meeting_view(db.pool(), id).await.unwrap();
    assert_eq!(view.quorum.present, 2);
    assert_eq!(view.quorum.required, 2);
    assert!(view.quorum.met);

    let finished = lifecycle::adjourn(db.store(), id).await.unwrap();
    assert_eq!(finished.status, MeetingStatus::Finished);

    // Attendance is frozen once the meeting is over.
    let err = lifecycle::set_attendance(db.store(), id, bob, AttendanceStatus::Present)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MeetingFinished(m) if m == id));
    assert!(is_met(&db, id).await);
}

#[tokio::test]
async fn test_zero_quorum_is_always_met() {
    let db = setup_test_db().await;
    let id = create_meeting(db.store(), "Informal", 0).await;
    assert!(is_met(&db, id).await);
}

#[tokio::test]
async fn test_summary_matches_stored_attendance() {
    let db = setup_test_db().await;
    let alice = create_member(db.pool(), "Alice", "Smith").await;
    let bob = create_member(db.pool(), "Bob", "Jones").await;
    let id = create_meeting(db.store(), "AGM", 3).await;

    lifecycle::record_attendance(
        db.store(),
        id,
        &HashMap::from([(alice, AttendanceStatus::Present), (bob, AttendanceStatus::Present)]),
    )
    .await
    .unwrap();

    let found = meeting::find_by_id(db.pool(), id).await.unwrap().unwrap();
    let records = attendance::find_for_meeting(db.pool(), id).await.unwrap();
    let summary = summarize(&found, &records);
    assert_eq!(summary.present, 2);
    assert_eq!(summary.required, 3);
    assert!(!summary.met);
}
