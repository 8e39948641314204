//! 垃圾桶内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 垃圾桶 CRUD 与部分更新
//! - 环境读数直写
//! - 看板聚合原语（计数/均值）

use crate::error::StorageError;
use crate::models::{DustbinRecord, DustbinUpdate};
use crate::traits::DustbinStore;
use domain::{BinStatus, FULL_FILL_THRESHOLD, LOW_BATTERY_THRESHOLD};
use std::collections::HashMap;
use std::sync::RwLock;

/// 垃圾桶内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemoryDustbinStore {
    dustbins: RwLock<HashMap<String, DustbinRecord>>,
}

impl InMemoryDustbinStore {
    /// 创建新的垃圾桶存储
    pub fn new() -> Self {
        Self {
            dustbins: RwLock::new(HashMap::new()),
        }
    }

    fn count_where(
        &self,
        predicate: impl Fn(&DustbinRecord) -> bool,
    ) -> Result<u64, StorageError> {
        let map = self
            .dustbins
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.values().filter(|item| predicate(item)).count() as u64)
    }
}

impl Default for InMemoryDustbinStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DustbinStore for InMemoryDustbinStore {
    /// 列出所有垃圾桶
    async fn list_dustbins(&self) -> Result<Vec<DustbinRecord>, StorageError> {
        let items = self
            .dustbins
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        Ok(items)
    }

    /// 查找指定垃圾桶
    async fn find_dustbin(
        &self,
        dustbin_id: &str,
    ) -> Result<Option<DustbinRecord>, StorageError> {
        let item = self
            .dustbins
            .read()
            .ok()
            .and_then(|map| map.get(dustbin_id).cloned());
        Ok(item)
    }

    /// 创建新垃圾桶
    async fn create_dustbin(
        &self,
        record: DustbinRecord,
    ) -> Result<DustbinRecord, StorageError> {
        let mut map = self
            .dustbins
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.dustbin_id) {
            return Err(StorageError::new("dustbin exists"));
        }
        map.insert(record.dustbin_id.clone(), record.clone());
        Ok(record)
    }

    /// 部分更新垃圾桶
    async fn update_dustbin(
        &self,
        dustbin_id: &str,
        update: DustbinUpdate,
        last_updated_ms: i64,
    ) -> Result<Option<DustbinRecord>, StorageError> {
        let mut map = self
            .dustbins
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let dustbin = match map.get_mut(dustbin_id) {
            Some(dustbin) => dustbin,
            None => return Ok(None),
        };
        if let Some(name) = update.name {
            dustbin.name = name;
        }
        if let Some(fill_level) = update.fill_level {
            dustbin.fill_level = fill_level;
        }
        if let Some(battery_level) = update.battery_level {
            dustbin.battery_level = battery_level;
        }
        if let Some(status) = update.status {
            dustbin.status = status;
        }
        if let Some(is_full) = update.is_full {
            dustbin.is_full = is_full;
        }
        dustbin.last_updated_ms = last_updated_ms;
        Ok(Some(dustbin.clone()))
    }

    /// 写入环境读数
    async fn update_environment(
        &self,
        dustbin_id: &str,
        temperature: f64,
        humidity: f64,
    ) -> Result<bool, StorageError> {
        let mut map = self
            .dustbins
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match map.get_mut(dustbin_id) {
            Some(dustbin) => {
                dustbin.temperature = temperature;
                dustbin.humidity = humidity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 删除垃圾桶
    async fn delete_dustbin(&self, dustbin_id: &str) -> Result<bool, StorageError> {
        let mut map = self
            .dustbins
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.remove(dustbin_id).is_some())
    }

    async fn count_dustbins(&self) -> Result<u64, StorageError> {
        self.count_where(|_| true)
    }

    async fn count_full(&self) -> Result<u64, StorageError> {
        self.count_where(|item| item.fill_level >= FULL_FILL_THRESHOLD)
    }

    async fn count_offline(&self) -> Result<u64, StorageError> {
        self.count_where(|item| item.status == BinStatus::Offline)
    }

    async fn count_low_battery(&self) -> Result<u64, StorageError> {
        self.count_where(|item| item.battery_level <= LOW_BATTERY_THRESHOLD)
    }

    async fn average_fill_level(&self) -> Result<Option<f64>, StorageError> {
        let map = self
            .dustbins
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.is_empty() {
            return Ok(None);
        }
        let sum: f64 = map.values().map(|item| item.fill_level).sum();
        Ok(Some(sum / map.len() as f64))
    }

    async fn delete_all_dustbins(&self) -> Result<(), StorageError> {
        let mut map = self
            .dustbins
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.clear();
        Ok(())
    }
}
