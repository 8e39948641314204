//! 垃圾桶状态管理器。
//!
//! 一次状态更新的完整序列：读取更新前快照 → 阈值规则求值 →
//! 创建派生通知 → 合并写入存储 → 返回更新后的记录。
//! 存储协作方通过构造函数注入，单测可替换为内存实现。

use std::sync::Arc;

use domain::now_epoch_ms;
use sdi_storage::{
    DustbinRecord, DustbinStore, DustbinUpdate, NotificationRecord, NotificationStore,
    StorageError,
};
use uuid::Uuid;

use crate::rules::evaluate_thresholds;

/// 状态管理流程中的错误。
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// 目标垃圾桶不存在。
    #[error("dustbin not found")]
    NotFound,
    /// 存储层错误。
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// 垃圾桶状态管理器。
///
/// 持有两个存储协作方的共享引用，自身可廉价克隆。
#[derive(Clone)]
pub struct BinStateManager {
    dustbins: Arc<dyn DustbinStore>,
    notifications: Arc<dyn NotificationStore>,
}

impl BinStateManager {
    pub fn new(dustbins: Arc<dyn DustbinStore>, notifications: Arc<dyn NotificationStore>) -> Self {
        Self {
            dustbins,
            notifications,
        }
    }

    /// 应用一次部分更新并派生阈值通知。
    ///
    /// 通知先于垃圾桶写入创建，写入失败不回滚通知。规则命中满桶
    /// 阈值时 `is_full` 强制置位，覆盖调用方显式传入的值；未命中
    /// 时调用方传入的 `is_full` 原样生效，已置位的满桶标记不会被
    /// 规则自动清除。
    pub async fn apply_update(
        &self,
        dustbin_id: &str,
        update: DustbinUpdate,
    ) -> Result<DustbinRecord, FleetError> {
        let current = self
            .dustbins
            .find_dustbin(dustbin_id)
            .await?
            .ok_or(FleetError::NotFound)?;

        let outcome = evaluate_thresholds(&current, &update);
        for pending in &outcome.pending {
            match pending.kind {
                domain::NotificationKind::Full => sdi_telemetry::record_full_alert(),
                domain::NotificationKind::BatteryLow => sdi_telemetry::record_battery_low_alert(),
                _ => {}
            }
            let record = NotificationRecord {
                notification_id: Uuid::new_v4().to_string(),
                dustbin_id: current.dustbin_id.clone(),
                dustbin_name: current.name.clone(),
                message: pending.message.clone(),
                kind: pending.kind,
                priority: pending.priority,
                ts_ms: now_epoch_ms(),
                is_read: false,
            };
            tracing::info!(
                dustbin_id = %record.dustbin_id,
                kind = record.kind.as_str(),
                priority = record.priority.as_str(),
                "threshold notification created"
            );
            self.notifications.create_notification(record).await?;
            sdi_telemetry::record_notification_created();
        }

        let mut update = update;
        if outcome.force_full {
            update.is_full = Some(true);
        }

        match self
            .dustbins
            .update_dustbin(dustbin_id, update, now_epoch_ms())
            .await
        {
            Ok(Some(record)) => {
                sdi_telemetry::record_update_applied();
                Ok(record)
            }
            Ok(None) => Err(FleetError::NotFound),
            Err(err) => {
                sdi_telemetry::record_update_failure();
                Err(err.into())
            }
        }
    }

    /// 环境量（温度、湿度）直写，不经过阈值规则。
    pub async fn apply_environment(
        &self,
        dustbin_id: &str,
        temperature: f64,
        humidity: f64,
    ) -> Result<(), FleetError> {
        let touched = self
            .dustbins
            .update_environment(dustbin_id, temperature, humidity)
            .await?;
        if !touched {
            return Err(FleetError::NotFound);
        }
        Ok(())
    }
}
