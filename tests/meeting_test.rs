mod common;

use quorum::errors::AppError;
use quorum::lifecycle;
use quorum::models::attendance::AttendanceStatus;
use quorum::models::meeting::{self, MeetingStatus};
use quorum::models::motion::NewMotion;
use quorum::models::statement::NewStatement;

use common::*;

#[tokio::test]
async fn test_create_and_find_meeting() {
    let db = setup_test_db().await;
    let id = create_meeting(db.store(), "  Board Meeting ", 3).await;

    let found = meeting::find_by_id(db.pool(), id).await.unwrap().expect("meeting exists");
    assert_eq!(found.title, "Board Meeting");
    assert_eq!(found.meeting_type, "Regular");
    assert_eq!(found.location.as_deref(), Some("Town Hall"));
    assert_eq!(found.quorum_required, 3);
    assert_eq!(found.status, MeetingStatus::Ongoing);
    assert_eq!(found.date, date(2026, 3, 1, 18, 0));
    assert!(found.ended_at.is_none());
}

#[tokio::test]
async fn test_create_meeting_rejects_invalid_input() {
    let db = setup_test_db().await;

    let mut blank_title = new_meeting("   ", 0);
    let err = lifecycle::create_meeting(db.store(), &blank_title, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    blank_title.title = "Budget".to_string();
    blank_title.quorum_required = -1;
    let err = lifecycle::create_meeting(db.store(), &blank_title, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(meeting::find_all(db.pool()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let db = setup_test_db().await;
    assert!(meeting::find_by_id(db.pool(), 999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_lists_newest_first_and_split_by_status() {
    let db = setup_test_db().await;

    let mut older = new_meeting("January", 0);
    older.date = date(2026, 1, 10, 18, 0);
    let mut newer = new_meeting("February", 0);
    newer.date = date(2026, 2, 10, 18, 0);
    let older_id = lifecycle::create_meeting(db.store(), &older, None).await.unwrap();
    let newer_id = lifecycle::create_meeting(db.store(), &newer, None).await.unwrap();

    let all: Vec<i64> = meeting::find_all(db.pool()).await.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(all, vec![newer_id, older_id]);

    lifecycle::adjourn(db.store(), older_id).await.unwrap();

    let ongoing = meeting::find_by_status(db.pool(), MeetingStatus::Ongoing).await.unwrap();
    let finished = meeting::find_by_status(db.pool(), MeetingStatus::Finished).await.unwrap();
    assert_eq!(ongoing.len(), 1);
    assert_eq!(ongoing[0].id, newer_id);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id, older_id);
}

#[tokio::test]
async fn test_adjourn_finishes_meeting() {
    let db = setup_test_db().await;
    let id = create_meeting(db.store(), "Board Meeting", 0).await;

    let adjourned = lifecycle::adjourn(db.store(), id).await.unwrap();
    assert_eq!(adjourned.status, MeetingStatus::Finished);
    let ended_at = adjourned.ended_at.expect("ended_at set");
    assert!(ended_at >= adjourned.date);

    let stored = meeting::find_by_id(db.pool(), id).await.unwrap().unwrap();
    assert!(stored.is_finished());
    assert_eq!(stored.ended_at, Some(ended_at));
}

#[tokio::test]
async fn test_adjourn_future_meeting_ends_no_earlier_than_its_date() {
    let db = setup_test_db().await;
    let mut future = new_meeting("Next year", 0);
    future.date = date(2099, 1, 1, 9, 0);
    let id = lifecycle::create_meeting(db.store(), &future, None).await.unwrap();

    let adjourned = lifecycle::adjourn(db.store(), id).await.unwrap();
    assert_eq!(adjourned.ended_at, Some(date(2099, 1, 1, 9, 0)));
}

#[tokio::test]
async fn test_adjourn_twice_keeps_first_end_time() {
    let db = setup_test_db().await;
    let id = create_meeting(db.store(), "Board Meeting", 0).await;

    let first = lifecycle::adjourn(db.store(), id).await.unwrap();
    let second = lifecycle::adjourn(db.store(), id).await.unwrap();
    assert_eq!(second.status, MeetingStatus::Finished);
    assert_eq!(second.ended_at, first.ended_at);
}

#[tokio::test]
async fn test_adjourn_missing_meeting_is_not_found() {
    let db = setup_test_db().await;
    let err = lifecycle::adjourn(db.store(), 42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_delete_meeting_cascades_to_owned_records() {
    let db = setup_test_db().await;
    let alice = create_member(db.pool(), "Alice", "Smith").await;
    let id = lifecycle::create_meeting(db.store(), &new_meeting("Doomed", 1), Some("Opening\nBudget"))
        .await
        .unwrap();
    lifecycle::set_attendance(db.store(), id, alice, AttendanceStatus::Present).await.unwrap();
    lifecycle::record_motion(
        db.store(),
        id,
        &NewMotion {
            text: "Approve the budget".to_string(),
            proposer_id: Some(alice),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    lifecycle::record_statement(
        db.store(),
        id,
        &NewStatement {
            speaker_id: Some(alice),
            content: "I support this".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let other = create_meeting(db.store(), "Survivor", 0).await;
    lifecycle::create_agenda_item(db.store(), other, "Keep me").await.unwrap();

    lifecycle::delete_meeting(db.store(), id).await.unwrap();

    assert!(meeting::find_by_id(db.pool(), id).await.unwrap().is_none());
    for table in ["agenda_items", "attendance", "motions", "statements"] {
        assert_eq!(count_rows(db.pool(), table, id).await, 0, "{table} not cleared");
    }
    assert_eq!(count_rows(db.pool(), "agenda_items", other).await, 1);
}

#[tokio::test]
async fn test_delete_missing_meeting_is_not_found() {
    let db = setup_test_db().await;
    let err = lifecycle::delete_meeting(db.store(), 7).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_writes_to_missing_meeting_are_not_found() {
    let db = setup_test_db().await;

    let err = lifecycle::create_agenda_item(db.store(), 5, "Opening").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let motion = NewMotion {
        text: "Adopt".to_string(),
        ..Default::default()
    };
    let err = lifecycle::record_motion(db.store(), 5, &motion).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
