use domain::BinStatus;
use sdi_storage::{DustbinRecord, DustbinStore, DustbinUpdate, InMemoryDustbinStore};

fn sample_dustbin(dustbin_id: &str, name: &str) -> DustbinRecord {
    DustbinRecord {
        dustbin_id: dustbin_id.to_string(),
        name: name.to_string(),
        latitude: 40.7829,
        longitude: -73.9654,
        address: "Central Park East, New York, NY".to_string(),
        fill_level: 0.0,
        battery_level: 100.0,
        status: BinStatus::Online,
        is_full: false,
        temperature: 20.0,
        humidity: 50.0,
        last_updated_ms: 1,
    }
}

#[tokio::test]
async fn create_and_find_dustbin() {
    let store = InMemoryDustbinStore::new();
    store
        .create_dustbin(sample_dustbin("bin-1", "SmartBin-001"))
        .await
        .expect("create");
    let found = store
        .find_dustbin("bin-1")
        .await
        .expect("query")
        .expect("dustbin");
    assert_eq!(found.name, "SmartBin-001");
    assert_eq!(found.status, BinStatus::Online);
    assert!(store.find_dustbin("missing").await.expect("query").is_none());
}

#[tokio::test]
async fn duplicate_create_rejected() {
    let store = InMemoryDustbinStore::new();
    store
        .create_dustbin(sample_dustbin("bin-1", "SmartBin-001"))
        .await
        .expect("create");
    let err = store
        .create_dustbin(sample_dustbin("bin-1", "SmartBin-001"))
        .await
        .expect_err("duplicate");
    assert_eq!(err.to_string(), "dustbin exists");
}

#[tokio::test]
async fn partial_update_merges_fields() {
    let store = InMemoryDustbinStore::new();
    store
        .create_dustbin(sample_dustbin("bin-1", "SmartBin-001"))
        .await
        .expect("create");
    let updated = store
        .update_dustbin(
            "bin-1",
            DustbinUpdate {
                fill_level: Some(55.0),
                ..Default::default()
            },
            42,
        )
        .await
        .expect("update")
        .expect("dustbin");
    // 缺省字段保持原值
    assert_eq!(updated.fill_level, 55.0);
    assert_eq!(updated.name, "SmartBin-001");
    assert_eq!(updated.battery_level, 100.0);
    assert_eq!(updated.last_updated_ms, 42);
}

#[tokio::test]
async fn update_unknown_dustbin_returns_none() {
    let store = InMemoryDustbinStore::new();
    let result = store
        .update_dustbin("missing", DustbinUpdate::default(), 1)
        .await
        .expect("update");
    assert!(result.is_none());
}

#[tokio::test]
async fn environment_write_bypasses_state_fields() {
    let store = InMemoryDustbinStore::new();
    store
        .create_dustbin(sample_dustbin("bin-1", "SmartBin-001"))
        .await
        .expect("create");
    let touched = store
        .update_environment("bin-1", 31.5, 64.0)
        .await
        .expect("env update");
    assert!(touched);
    let found = store
        .find_dustbin("bin-1")
        .await
        .expect("query")
        .expect("dustbin");
    assert_eq!(found.temperature, 31.5);
    assert_eq!(found.humidity, 64.0);
    // 环境直写不触碰 last_updated_ms
    assert_eq!(found.last_updated_ms, 1);
    assert!(!store
        .update_environment("missing", 0.0, 0.0)
        .await
        .expect("env update"));
}

#[tokio::test]
async fn delete_dustbin_reports_existence() {
    let store = InMemoryDustbinStore::new();
    store
        .create_dustbin(sample_dustbin("bin-1", "SmartBin-001"))
        .await
        .expect("create");
    assert!(store.delete_dustbin("bin-1").await.expect("delete"));
    assert!(!store.delete_dustbin("bin-1").await.expect("delete"));
}
