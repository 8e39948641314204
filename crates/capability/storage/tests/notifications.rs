use domain::{NotificationKind, NotificationPriority};
use sdi_storage::{InMemoryNotificationStore, NotificationRecord, NotificationStore};

fn sample_notification(notification_id: &str, ts_ms: i64, is_read: bool) -> NotificationRecord {
    NotificationRecord {
        notification_id: notification_id.to_string(),
        dustbin_id: "bin-1".to_string(),
        dustbin_name: "SmartBin-001".to_string(),
        message: "Dustbin 'SmartBin-001' is 92.0% full and needs emptying!".to_string(),
        kind: NotificationKind::Full,
        priority: NotificationPriority::High,
        ts_ms,
        is_read,
    }
}

#[tokio::test]
async fn list_orders_most_recent_first() {
    let store = InMemoryNotificationStore::new();
    for (id, ts) in [("n-1", 10), ("n-2", 30), ("n-3", 20)] {
        store
            .create_notification(sample_notification(id, ts, false))
            .await
            .expect("create");
    }
    let items = store.list_notifications(false, 50).await.expect("list");
    let ids: Vec<&str> = items
        .iter()
        .map(|item| item.notification_id.as_str())
        .collect();
    assert_eq!(ids, ["n-2", "n-3", "n-1"]);
}

#[tokio::test]
async fn unread_filter_applies_before_limit() {
    let store = InMemoryNotificationStore::new();
    store
        .create_notification(sample_notification("n-read", 40, true))
        .await
        .expect("create");
    store
        .create_notification(sample_notification("n-unread", 10, false))
        .await
        .expect("create");
    let items = store.list_notifications(true, 1).await.expect("list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].notification_id, "n-unread");
}

#[tokio::test]
async fn limit_caps_results() {
    let store = InMemoryNotificationStore::new();
    for ts in 0..5 {
        store
            .create_notification(sample_notification(&format!("n-{ts}"), ts, false))
            .await
            .expect("create");
    }
    let items = store.list_notifications(false, 3).await.expect("list");
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn mark_read_is_idempotent() {
    let store = InMemoryNotificationStore::new();
    store
        .create_notification(sample_notification("n-1", 1, false))
        .await
        .expect("create");
    assert!(store.mark_read("n-1").await.expect("first"));
    assert!(store.mark_read("n-1").await.expect("second"));
    let items = store.list_notifications(false, 10).await.expect("list");
    assert!(items[0].is_read);
}

#[tokio::test]
async fn mark_read_unknown_id_reports_missing() {
    let store = InMemoryNotificationStore::new();
    assert!(!store.mark_read("missing").await.expect("mark"));
}

#[tokio::test]
async fn count_unread_ignores_read() {
    let store = InMemoryNotificationStore::new();
    store
        .create_notification(sample_notification("n-1", 1, false))
        .await
        .expect("create");
    store
        .create_notification(sample_notification("n-2", 2, true))
        .await
        .expect("create");
    assert_eq!(store.count_unread().await.expect("count"), 1);
}
