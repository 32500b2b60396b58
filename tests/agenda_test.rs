mod common;

use quorum::errors::AppError;
use quorum::lifecycle;
use quorum::models::agenda_item;

use common::*;

async fn titles(db: &TestDb, meeting_id: i64) -> Vec<String> {
    agenda_item::find_for_meeting(db.pool(), meeting_id)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect()
}

#[tokio::test]
async fn test_initial_agenda_skips_blank_lines() {
    let db = setup_test_db().await;
    let id = lifecycle::create_meeting(db.store(), &new_meeting("AGM", 0), Some("A\n\nB\n  \nC"))
        .await
        .unwrap();

    assert_eq!(titles(&db, id).await, vec!["A", "B", "C"]);
    let items = agenda_item::find_for_meeting(db.pool(), id).await.unwrap();
    assert!(items.iter().all(|item| !item.is_completed && item.meeting_id == id));
}

#[tokio::test]
async fn test_blank_initial_agenda_creates_no_items() {
    let db = setup_test_db().await;
    let id = lifecycle::create_meeting(db.store(), &new_meeting("AGM", 0), Some("\n   \n"))
        .await
        .unwrap();
    assert!(titles(&db, id).await.is_empty());
}

#[tokio::test]
async fn test_failed_meeting_insert_leaves_no_agenda_items() {
    let db = setup_test_db().await;
    let mut bad = new_meeting("AGM", 0);
    bad.meeting_type = " ".to_string();

    let err = lifecycle::create_meeting(db.store(), &bad, Some("Opening\nClosing"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agenda_items")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_items_are_appended_in_order() {
    let db = setup_test_db().await;
    let id = lifecycle::create_meeting(db.store(), &new_meeting("AGM", 0), Some("Opening"))
        .await
        .unwrap();

    let single = lifecycle::create_agenda_item(db.store(), id, "  Budget  ").await.unwrap();
    let bulk = lifecycle::create_agenda_items(db.store(), id, "Elections\r\n\r\nAOB\n")
        .await
        .unwrap();

    assert_eq!(bulk.len(), 2);
    assert!(bulk[0] > single && bulk[1] > bulk[0]);
    assert_eq!(titles(&db, id).await, vec!["Opening", "Budget", "Elections", "AOB"]);

    let found = agenda_item::find_by_id(db.pool(), single).await.unwrap().unwrap();
    assert_eq!(found.title, "Budget");
}

#[tokio::test]
async fn test_blank_agenda_title_is_rejected() {
    let db = setup_test_db().await;
    let id = create_meeting(db.store(), "AGM", 0).await;

    let err = lifecycle::create_agenda_item(db.store(), id, "   ").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = lifecycle::create_agenda_items(db.store(), id, "\n\n").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(titles(&db, id).await.is_empty());
}

#[tokio::test]
async fn test_agenda_items_are_scoped_to_their_meeting() {
    let db = setup_test_db().await;
    let first = lifecycle::create_meeting(db.store(), &new_meeting("First", 0), Some("One"))
        .await
        .unwrap();
    let second = lifecycle::create_meeting(db.store(), &new_meeting("Second", 0), Some("Two"))
        .await
        .unwrap();

    assert_eq!(titles(&db, first).await, vec!["One"]);
    assert_eq!(titles(&db, second).await, vec!["Two"]);
}
