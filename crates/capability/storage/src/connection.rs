//! Postgres 连接池初始化。
//!
//! 两个 Pg 存储实例（垃圾桶/通知）克隆共享同一个池。负载特征是
//! 大量短查询（单桶读写、计数聚合），没有长事务，小池即可饱和。

use crate::error::StorageError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// 连接池上限。更新与看板轮询并发有限，8 个连接足够。
const MAX_CONNECTIONS: u32 = 8;

/// 从数据库 URL 建立连接池。
///
/// 表结构由 migrations/ 下的 SQL 预先建立，这里不做 schema 检查。
pub async fn connect_pool(database_url: &str) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;
    Ok(pool)
}
