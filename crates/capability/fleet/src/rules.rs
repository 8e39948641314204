//! 阈值规则求值。
//!
//! 纯函数：输入更新前的垃圾桶快照与本次部分更新，输出待创建的
//! 通知事件与满桶强制标记，不做任何 IO。阈值判定只看本次更新
//! 携带的字段，未携带的字段不会触发通知。

use domain::{
    FULL_FILL_THRESHOLD, LOW_BATTERY_THRESHOLD, NotificationKind, NotificationPriority,
};
use sdi_storage::{DustbinRecord, DustbinUpdate};

/// 规则求值产出的待创建通知。
///
/// 只携带消息内容与分类，通知 ID 与时间戳由调用方在创建时补齐。
#[derive(Debug, Clone, PartialEq)]
pub struct PendingNotification {
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub message: String,
}

/// 一次求值的完整结果。
#[derive(Debug, Clone, Default)]
pub struct RuleOutcome {
    /// 填充率达到满桶阈值时强制置位 `is_full`，覆盖调用方显式传入的值。
    pub force_full: bool,
    pub pending: Vec<PendingNotification>,
}

/// 对一次部分更新求值阈值规则。
///
/// - 填充率达到 [`FULL_FILL_THRESHOLD`]（含）触发满桶通知并强制置位 `is_full`；
/// - 电量低于等于 [`LOW_BATTERY_THRESHOLD`] 触发低电量通知；
/// - 两条规则互不排斥，一次更新最多产出两条通知；
/// - 消息中的桶名取更新前快照（`current`），并发改名下允许陈旧。
pub fn evaluate_thresholds(current: &DustbinRecord, update: &DustbinUpdate) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let name = current.name.as_str();

    if let Some(fill_level) = update.fill_level {
        if fill_level >= FULL_FILL_THRESHOLD {
            outcome.force_full = true;
            outcome.pending.push(PendingNotification {
                kind: NotificationKind::Full,
                priority: NotificationPriority::High,
                message: format!("Dustbin '{name}' is {fill_level:.1}% full and needs emptying!"),
            });
        }
    }

    if let Some(battery_level) = update.battery_level {
        if battery_level <= LOW_BATTERY_THRESHOLD {
            outcome.pending.push(PendingNotification {
                kind: NotificationKind::BatteryLow,
                priority: NotificationPriority::Medium,
                message: format!("Dustbin '{name}' has low battery: {battery_level:.1}%"),
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::BinStatus;

    fn sample_dustbin() -> DustbinRecord {
        DustbinRecord {
            dustbin_id: "bin-1".to_string(),
            name: "SmartBin-001".to_string(),
            latitude: 40.7829,
            longitude: -73.9654,
            address: "Central Park East, New York, NY".to_string(),
            fill_level: 50.0,
            battery_level: 80.0,
            status: BinStatus::Online,
            is_full: false,
            temperature: 20.0,
            humidity: 50.0,
            last_updated_ms: 1,
        }
    }

    #[test]
    fn full_threshold_is_inclusive() {
        let outcome = evaluate_thresholds(
            &sample_dustbin(),
            &DustbinUpdate {
                fill_level: Some(90.0),
                ..Default::default()
            },
        );
        assert!(outcome.force_full);
        assert_eq!(outcome.pending.len(), 1);
        assert_eq!(outcome.pending[0].kind, NotificationKind::Full);
        assert_eq!(outcome.pending[0].priority, NotificationPriority::High);
        assert_eq!(
            outcome.pending[0].message,
            "Dustbin 'SmartBin-001' is 90.0% full and needs emptying!"
        );
    }

    #[test]
    fn below_full_threshold_is_silent() {
        let outcome = evaluate_thresholds(
            &sample_dustbin(),
            &DustbinUpdate {
                fill_level: Some(89.9),
                ..Default::default()
            },
        );
        assert!(!outcome.force_full);
        assert!(outcome.pending.is_empty());
    }

    #[test]
    fn battery_threshold_is_inclusive() {
        let outcome = evaluate_thresholds(
            &sample_dustbin(),
            &DustbinUpdate {
                battery_level: Some(20.0),
                ..Default::default()
            },
        );
        assert!(!outcome.force_full);
        assert_eq!(outcome.pending.len(), 1);
        assert_eq!(outcome.pending[0].kind, NotificationKind::BatteryLow);
        assert_eq!(outcome.pending[0].priority, NotificationPriority::Medium);
        assert_eq!(
            outcome.pending[0].message,
            "Dustbin 'SmartBin-001' has low battery: 20.0%"
        );
    }

    #[test]
    fn just_above_battery_threshold_is_silent() {
        let outcome = evaluate_thresholds(
            &sample_dustbin(),
            &DustbinUpdate {
                battery_level: Some(20.1),
                ..Default::default()
            },
        );
        assert!(outcome.pending.is_empty());
    }

    #[test]
    fn both_rules_can_fire_in_one_update() {
        let outcome = evaluate_thresholds(
            &sample_dustbin(),
            &DustbinUpdate {
                fill_level: Some(95.5),
                battery_level: Some(15.0),
                ..Default::default()
            },
        );
        assert!(outcome.force_full);
        assert_eq!(outcome.pending.len(), 2);
        assert_eq!(outcome.pending[0].kind, NotificationKind::Full);
        assert_eq!(outcome.pending[1].kind, NotificationKind::BatteryLow);
    }

    #[test]
    fn absent_fields_never_trigger() {
        // 当前电量已低于阈值，但本次更新未携带电量字段，不触发通知
        let mut current = sample_dustbin();
        current.battery_level = 5.0;
        current.fill_level = 99.0;
        let outcome = evaluate_thresholds(&current, &DustbinUpdate::default());
        assert!(!outcome.force_full);
        assert!(outcome.pending.is_empty());
    }
}
