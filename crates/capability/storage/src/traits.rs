//! 存储接口 Trait 定义
//!
//! 定义两个集合存储的异步接口：
//! - DustbinStore：垃圾桶最新状态存储
//! - NotificationStore：通知日志存储
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发
//! - 聚合原语（计数/均值）下沉到存储层，阈值常量取自 domain

use crate::error::StorageError;
use crate::models::{DustbinRecord, DustbinUpdate, NotificationRecord};
use async_trait::async_trait;

/// 垃圾桶存储接口
///
/// 提供垃圾桶 CRUD、部分更新与看板聚合原语。
#[async_trait]
pub trait DustbinStore: Send + Sync {
    /// 列出所有垃圾桶
    async fn list_dustbins(&self) -> Result<Vec<DustbinRecord>, StorageError>;

    /// 查找指定垃圾桶
    async fn find_dustbin(&self, dustbin_id: &str)
    -> Result<Option<DustbinRecord>, StorageError>;

    /// 创建新垃圾桶
    async fn create_dustbin(&self, record: DustbinRecord)
    -> Result<DustbinRecord, StorageError>;

    /// 部分更新垃圾桶：缺省字段保持不变，`last_updated_ms` 无条件写入。
    /// 垃圾桶不存在时返回 None。
    async fn update_dustbin(
        &self,
        dustbin_id: &str,
        update: DustbinUpdate,
        last_updated_ms: i64,
    ) -> Result<Option<DustbinRecord>, StorageError>;

    /// 写入环境读数（温度/湿度）。
    ///
    /// 绕过告警派生路径的直写通道，不触碰其它字段。
    async fn update_environment(
        &self,
        dustbin_id: &str,
        temperature: f64,
        humidity: f64,
    ) -> Result<bool, StorageError>;

    /// 删除垃圾桶（不级联删除其通知）
    async fn delete_dustbin(&self, dustbin_id: &str) -> Result<bool, StorageError>;

    /// 垃圾桶总数
    async fn count_dustbins(&self) -> Result<u64, StorageError>;

    /// 满桶数量（fill_level >= 满桶阈值）
    async fn count_full(&self) -> Result<u64, StorageError>;

    /// 离线数量（status == offline）
    async fn count_offline(&self) -> Result<u64, StorageError>;

    /// 低电量数量（battery_level <= 低电量阈值）
    async fn count_low_battery(&self) -> Result<u64, StorageError>;

    /// 填充度均值；无垃圾桶时返回 None
    async fn average_fill_level(&self) -> Result<Option<f64>, StorageError>;

    /// 清空集合（演示数据重置用）
    async fn delete_all_dustbins(&self) -> Result<(), StorageError>;
}

/// 通知存储接口
///
/// 只追加创建 + 条件读取 + 置已读，不提供内容修改。
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// 追加一条通知
    async fn create_notification(
        &self,
        record: NotificationRecord,
    ) -> Result<NotificationRecord, StorageError>;

    /// 按时间倒序列出通知，最多 `limit` 条；
    /// `unread_only` 为 true 时先过滤未读再截断。
    async fn list_notifications(
        &self,
        unread_only: bool,
        limit: i64,
    ) -> Result<Vec<NotificationRecord>, StorageError>;

    /// 将通知置为已读。
    ///
    /// 通知不存在返回 false；已是已读状态时重复调用仍返回 true（幂等）。
    async fn mark_read(&self, notification_id: &str) -> Result<bool, StorageError>;

    /// 未读通知数量
    async fn count_unread(&self) -> Result<u64, StorageError>;

    /// 清空集合（演示数据重置用）
    async fn delete_all_notifications(&self) -> Result<(), StorageError>;
}
