//! 通知内存存储实现
//!
//! 仅用于本地演示和测试。

use crate::error::StorageError;
use crate::models::NotificationRecord;
use crate::traits::NotificationStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// 通知内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemoryNotificationStore {
    notifications: RwLock<HashMap<String, NotificationRecord>>,
}

impl InMemoryNotificationStore {
    /// 创建新的通知存储
    pub fn new() -> Self {
        Self {
            notifications: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl NotificationStore for InMemoryNotificationStore {
    /// 追加一条通知
    async fn create_notification(
        &self,
        record: NotificationRecord,
    ) -> Result<NotificationRecord, StorageError> {
        let mut map = self
            .notifications
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.notification_id) {
            return Err(StorageError::new("notification exists"));
        }
        map.insert(record.notification_id.clone(), record.clone());
        Ok(record)
    }

    /// 按时间倒序列出通知
    async fn list_notifications(
        &self,
        unread_only: bool,
        limit: i64,
    ) -> Result<Vec<NotificationRecord>, StorageError> {
        let map = self
            .notifications
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        let mut items: Vec<NotificationRecord> = map
            .values()
            .filter(|item| !unread_only || !item.is_read)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.ts_ms.cmp(&a.ts_ms));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }

    /// 置已读（幂等：已读状态下重复调用仍成功）
    async fn mark_read(&self, notification_id: &str) -> Result<bool, StorageError> {
        let mut map = self
            .notifications
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match map.get_mut(notification_id) {
            Some(item) => {
                item.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_unread(&self) -> Result<u64, StorageError> {
        let map = self
            .notifications
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.values().filter(|item| !item.is_read).count() as u64)
    }

    async fn delete_all_notifications(&self) -> Result<(), StorageError> {
        let mut map = self
            .notifications
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.clear();
        Ok(())
    }
}
