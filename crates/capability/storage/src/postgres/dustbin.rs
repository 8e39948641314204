//! Postgres 垃圾桶存储实现
//!
//! 通过 SQL 查询实现垃圾桶 CRUD、部分更新与聚合原语。
//!
//! 设计要点：
//! - 使用参数化 SQL 防止注入
//! - 部分更新使用 coalesce：未提供的字段保持原值，一条语句内原子完成
//! - 聚合计数直接下推到数据库

use crate::error::StorageError;
use crate::models::{DustbinRecord, DustbinUpdate};
use crate::postgres::parse_status;
use crate::traits::DustbinStore;
use domain::{FULL_FILL_THRESHOLD, LOW_BATTERY_THRESHOLD};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const DUSTBIN_COLUMNS: &str = "dustbin_id, name, latitude, longitude, address, \
     fill_level, battery_level, status, is_full, temperature, humidity, last_updated_ms";

pub struct PgDustbinStore {
    pub pool: PgPool,
}

impl PgDustbinStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::connect_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn record_from_row(row: &PgRow) -> Result<DustbinRecord, StorageError> {
    let status: String = row.try_get("status")?;
    Ok(DustbinRecord {
        dustbin_id: row.try_get("dustbin_id")?,
        name: row.try_get("name")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        address: row.try_get("address")?,
        fill_level: row.try_get("fill_level")?,
        battery_level: row.try_get("battery_level")?,
        status: parse_status(&status)?,
        is_full: row.try_get("is_full")?,
        temperature: row.try_get("temperature")?,
        humidity: row.try_get("humidity")?,
        last_updated_ms: row.try_get("last_updated_ms")?,
    })
}

#[async_trait::async_trait]
impl DustbinStore for PgDustbinStore {
    async fn list_dustbins(&self) -> Result<Vec<DustbinRecord>, StorageError> {
        let rows = sqlx::query(&format!("select {DUSTBIN_COLUMNS} from dustbins"))
            .fetch_all(&self.pool)
            .await?;
        let mut dustbins = Vec::with_capacity(rows.len());
        for row in rows {
            dustbins.push(record_from_row(&row)?);
        }
        Ok(dustbins)
    }

    async fn find_dustbin(
        &self,
        dustbin_id: &str,
    ) -> Result<Option<DustbinRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {DUSTBIN_COLUMNS} from dustbins where dustbin_id = $1"
        ))
        .bind(dustbin_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(record_from_row(&row)?))
    }

    async fn create_dustbin(
        &self,
        record: DustbinRecord,
    ) -> Result<DustbinRecord, StorageError> {
        sqlx::query(
            "insert into dustbins (dustbin_id, name, latitude, longitude, address, \
             fill_level, battery_level, status, is_full, temperature, humidity, last_updated_ms) \
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(&record.dustbin_id)
        .bind(&record.name)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.address)
        .bind(record.fill_level)
        .bind(record.battery_level)
        .bind(record.status.as_str())
        .bind(record.is_full)
        .bind(record.temperature)
        .bind(record.humidity)
        .bind(record.last_updated_ms)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn update_dustbin(
        &self,
        dustbin_id: &str,
        update: DustbinUpdate,
        last_updated_ms: i64,
    ) -> Result<Option<DustbinRecord>, StorageError> {
        let status = update.status.map(|status| status.as_str().to_string());
        let row = sqlx::query(&format!(
            "update dustbins set \
             name = coalesce($1, name), \
             fill_level = coalesce($2, fill_level), \
             battery_level = coalesce($3, battery_level), \
             status = coalesce($4, status), \
             is_full = coalesce($5, is_full), \
             last_updated_ms = $6 \
             where dustbin_id = $7 \
             returning {DUSTBIN_COLUMNS}"
        ))
        .bind(update.name)
        .bind(update.fill_level)
        .bind(update.battery_level)
        .bind(status)
        .bind(update.is_full)
        .bind(last_updated_ms)
        .bind(dustbin_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(record_from_row(&row)?))
    }

    async fn update_environment(
        &self,
        dustbin_id: &str,
        temperature: f64,
        humidity: f64,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "update dustbins set temperature = $1, humidity = $2 where dustbin_id = $3",
        )
        .bind(temperature)
        .bind(humidity)
        .bind(dustbin_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_dustbin(&self, dustbin_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from dustbins where dustbin_id = $1")
            .bind(dustbin_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_dustbins(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("select count(*) from dustbins")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn count_full(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("select count(*) from dustbins where fill_level >= $1")
                .bind(FULL_FILL_THRESHOLD)
                .fetch_one(&self.pool)
                .await?;
        Ok(count as u64)
    }

    async fn count_offline(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("select count(*) from dustbins where status = 'offline'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count as u64)
    }

    async fn count_low_battery(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("select count(*) from dustbins where battery_level <= $1")
                .bind(LOW_BATTERY_THRESHOLD)
                .fetch_one(&self.pool)
                .await?;
        Ok(count as u64)
    }

    async fn average_fill_level(&self) -> Result<Option<f64>, StorageError> {
        let average: Option<f64> = sqlx::query_scalar("select avg(fill_level) from dustbins")
            .fetch_one(&self.pool)
            .await?;
        Ok(average)
    }

    async fn delete_all_dustbins(&self) -> Result<(), StorageError> {
        sqlx::query("delete from dustbins").execute(&self.pool).await?;
        Ok(())
    }
}
