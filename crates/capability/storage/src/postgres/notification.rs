//! Postgres 通知存储实现
//!
//! 设计要点：
//! - 只追加创建，内容不提供 update 语句
//! - 置已读按"命中行数 > 0"判定，重复置已读仍视为成功（幂等）

use crate::error::StorageError;
use crate::models::NotificationRecord;
use crate::postgres::{parse_kind, parse_priority};
use crate::traits::NotificationStore;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const NOTIFICATION_COLUMNS: &str = "notification_id, dustbin_id, dustbin_name, message, \
     kind, priority, ts_ms, is_read";

pub struct PgNotificationStore {
    pub pool: PgPool,
}

impl PgNotificationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::connect_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn record_from_row(row: &PgRow) -> Result<NotificationRecord, StorageError> {
    let kind: String = row.try_get("kind")?;
    let priority: String = row.try_get("priority")?;
    Ok(NotificationRecord {
        notification_id: row.try_get("notification_id")?,
        dustbin_id: row.try_get("dustbin_id")?,
        dustbin_name: row.try_get("dustbin_name")?,
        message: row.try_get("message")?,
        kind: parse_kind(&kind)?,
        priority: parse_priority(&priority)?,
        ts_ms: row.try_get("ts_ms")?,
        is_read: row.try_get("is_read")?,
    })
}

#[async_trait::async_trait]
impl NotificationStore for PgNotificationStore {
    async fn create_notification(
        &self,
        record: NotificationRecord,
    ) -> Result<NotificationRecord, StorageError> {
        sqlx::query(
            "insert into notifications (notification_id, dustbin_id, dustbin_name, message, \
             kind, priority, ts_ms, is_read) \
             values ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&record.notification_id)
        .bind(&record.dustbin_id)
        .bind(&record.dustbin_name)
        .bind(&record.message)
        .bind(record.kind.as_str())
        .bind(record.priority.as_str())
        .bind(record.ts_ms)
        .bind(record.is_read)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_notifications(
        &self,
        unread_only: bool,
        limit: i64,
    ) -> Result<Vec<NotificationRecord>, StorageError> {
        let query = if unread_only {
            format!(
                "select {NOTIFICATION_COLUMNS} from notifications \
                 where is_read = false order by ts_ms desc limit $1"
            )
        } else {
            format!(
                "select {NOTIFICATION_COLUMNS} from notifications \
                 order by ts_ms desc limit $1"
            )
        };
        let rows = sqlx::query(&query)
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await?;
        let mut notifications = Vec::with_capacity(rows.len());
        for row in rows {
            notifications.push(record_from_row(&row)?);
        }
        Ok(notifications)
    }

    async fn mark_read(&self, notification_id: &str) -> Result<bool, StorageError> {
        let result =
            sqlx::query("update notifications set is_read = true where notification_id = $1")
                .bind(notification_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_unread(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("select count(*) from notifications where is_read = false")
                .fetch_one(&self.pool)
                .await?;
        Ok(count as u64)
    }

    async fn delete_all_notifications(&self) -> Result<(), StorageError> {
        sqlx::query("delete from notifications")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
