use api_contract::{DustbinDto, LocationDto, NotificationDto, UpdateDustbinRequest};

#[test]
fn dustbin_dto_serializes_camel_case() {
    let dto = DustbinDto {
        dustbin_id: "bin-1".to_string(),
        name: "SmartBin-001".to_string(),
        location: LocationDto {
            latitude: 40.7829,
            longitude: -73.9654,
            address: "Central Park East, New York, NY".to_string(),
        },
        fill_level: 42.5,
        battery_level: 88.0,
        status: "online".to_string(),
        is_full: false,
        temperature: 20.0,
        humidity: 50.0,
        last_updated_ms: 1_700_000_000_000,
    };
    let value = serde_json::to_value(&dto).expect("serialize");
    assert_eq!(value["dustbinId"], "bin-1");
    assert_eq!(value["fillLevel"], 42.5);
    assert_eq!(value["isFull"], false);
    assert_eq!(value["location"]["latitude"], 40.7829);
    assert_eq!(value["lastUpdatedMs"], 1_700_000_000_000_i64);
}

#[test]
fn notification_dto_uses_type_field() {
    let dto = NotificationDto {
        notification_id: "n-1".to_string(),
        dustbin_id: "bin-1".to_string(),
        dustbin_name: "SmartBin-001".to_string(),
        message: "Dustbin 'SmartBin-001' is 92.0% full and needs emptying!".to_string(),
        kind: "full".to_string(),
        priority: "high".to_string(),
        ts_ms: 1,
        is_read: false,
    };
    let value = serde_json::to_value(&dto).expect("serialize");
    assert_eq!(value["type"], "full");
    assert_eq!(value["priority"], "high");
    assert!(value.get("kind").is_none());
}

#[test]
fn update_request_allows_sparse_fields() {
    let request: UpdateDustbinRequest =
        serde_json::from_str(r#"{"fillLevel": 91.0}"#).expect("deserialize");
    assert_eq!(request.fill_level, Some(91.0));
    assert!(request.name.is_none());
    assert!(request.battery_level.is_none());
    assert!(request.status.is_none());
    assert!(request.is_full.is_none());
}
