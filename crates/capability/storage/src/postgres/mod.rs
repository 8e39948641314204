//! PostgreSQL 存储实现
//!
//! 使用 sqlx 提供类型安全的数据库访问；表结构见仓库根目录 migrations/。

pub mod dustbin;
pub mod notification;

pub use dustbin::PgDustbinStore;
pub use notification::PgNotificationStore;

use crate::error::StorageError;
use domain::{BinStatus, NotificationKind, NotificationPriority};

/// 解析存储中的状态字符串；脏数据视为一致性错误。
pub(crate) fn parse_status(value: &str) -> Result<BinStatus, StorageError> {
    BinStatus::parse(value).ok_or_else(|| StorageError::new(format!("invalid status: {value}")))
}

pub(crate) fn parse_kind(value: &str) -> Result<NotificationKind, StorageError> {
    NotificationKind::parse(value)
        .ok_or_else(|| StorageError::new(format!("invalid notification type: {value}")))
}

pub(crate) fn parse_priority(value: &str) -> Result<NotificationPriority, StorageError> {
    NotificationPriority::parse(value)
        .ok_or_else(|| StorageError::new(format!("invalid priority: {value}")))
}
