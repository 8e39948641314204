use domain::{BinStatus, NotificationKind, NotificationPriority, clamp, round1};

#[test]
fn status_round_trips() {
    for status in [BinStatus::Online, BinStatus::Offline, BinStatus::Maintenance] {
        assert_eq!(BinStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(BinStatus::parse("broken"), None);
}

#[test]
fn notification_enums_round_trip() {
    assert_eq!(
        NotificationKind::parse("battery_low"),
        Some(NotificationKind::BatteryLow)
    );
    assert_eq!(
        NotificationPriority::parse("critical"),
        Some(NotificationPriority::Critical)
    );
    assert_eq!(NotificationKind::parse(""), None);
}

#[test]
fn clamp_bounds() {
    assert_eq!(clamp(0.0, 100.0, 104.2), 100.0);
    assert_eq!(clamp(0.0, 100.0, -3.0), 0.0);
    assert_eq!(clamp(-10.0, 50.0, 21.5), 21.5);
}

#[test]
fn round1_one_decimal() {
    assert_eq!(round1(66.666_666), 66.7);
    assert_eq!(round1(0.0), 0.0);
    assert_eq!(round1(89.95), 90.0);
}
