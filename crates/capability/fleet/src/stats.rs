//! 车队看板聚合。
//!
//! 组合存储层聚合原语计算一次快照，统计之间不保证同一时刻
//! 一致（逐项读取，期间允许并发写入）。

use std::sync::Arc;

use domain::{now_epoch_ms, round1};
use sdi_storage::{DustbinStore, NotificationStore};

use crate::manager::FleetError;

/// 一次看板统计快照。
#[derive(Debug, Clone, PartialEq)]
pub struct FleetStats {
    pub total_bins: u64,
    pub full_bins: u64,
    pub offline_bins: u64,
    pub low_battery_bins: u64,
    pub unread_notifications: u64,
    /// 平均填充率，保留一位小数；空车队为 0.0。
    pub avg_fill_level: f64,
    pub last_updated_ms: i64,
}

/// 车队统计聚合器。
#[derive(Clone)]
pub struct FleetAggregator {
    dustbins: Arc<dyn DustbinStore>,
    notifications: Arc<dyn NotificationStore>,
}

impl FleetAggregator {
    pub fn new(dustbins: Arc<dyn DustbinStore>, notifications: Arc<dyn NotificationStore>) -> Self {
        Self {
            dustbins,
            notifications,
        }
    }

    pub async fn compute_stats(&self) -> Result<FleetStats, FleetError> {
        let total_bins = self.dustbins.count_dustbins().await?;
        let full_bins = self.dustbins.count_full().await?;
        let offline_bins = self.dustbins.count_offline().await?;
        let low_battery_bins = self.dustbins.count_low_battery().await?;
        let unread_notifications = self.notifications.count_unread().await?;
        let avg_fill_level = match self.dustbins.average_fill_level().await? {
            Some(average) => round1(average),
            None => 0.0,
        };

        sdi_telemetry::record_stats_query();
        Ok(FleetStats {
            total_bins,
            full_bins,
            offline_bins,
            low_battery_bins,
            unread_notifications,
            avg_fill_level,
            last_updated_ms: now_epoch_ms(),
        })
    }
}
