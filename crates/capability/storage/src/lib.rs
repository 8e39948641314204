//! # SDI Storage 模块
//!
//! 本模块提供统一的数据存储抽象层，支持多种存储后端实现。
//!
//! ## 架构设计
//!
//! 该模块采用分层架构，遵循以下原则：
//!
//! 1. **接口抽象层** (`traits.rs`)：定义两个集合存储的异步 Trait 接口
//! 2. **数据模型层** (`models.rs`)：定义存储相关的数据结构
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **连接管理层** (`connection.rs`)：数据库连接池管理
//! 5. **实现层**：
//!    - `in_memory/`：内存存储实现（用于测试和演示）
//!    - `postgres/`：PostgreSQL 存储实现（生产环境使用）
//!
//! ## 集合说明
//!
//! 系统只有两个顶层集合：
//!
//! - **dustbins**：垃圾桶最新状态（按 `dustbin_id` 唯一），只保存最新一份，
//!   不保存历史时序。部分更新语义：未提供的字段保持不变。
//! - **notifications**：告警通知日志（按 `notification_id` 唯一），内容创建后
//!   不可变，仅 `is_read` 可置为 true。通知通过 `dustbin_id` 弱引用垃圾桶，
//!   删除垃圾桶不会级联删除其通知。
//!
//! ## 聚合原语
//!
//! 看板统计不在存储层拼装，但存储层负责提供聚合原语：
//! `count_dustbins` / `count_full` / `count_offline` / `count_low_battery` /
//! `average_fill_level` / `count_unread`。阈值常量取自 `domain`。
//!
//! ## 设计约束
//!
//! - **禁止直接 SQL**：Handler 层禁止直接写 SQL，统一通过 storage 层
//! - **单文档原子性**：一次部分更新写入是原子的；跨"读当前状态"与"写新状态"
//!   两步之间不提供隔离保证，由上层按最终一致处理
//!
//! ## 性能考虑
//!
//! - **连接池**：PostgreSQL 连接池最大连接数为 8，可根据负载调整
//! - **参数化查询**：所有 SQL 使用参数绑定，防止 SQL 注入且支持查询计划缓存

// 模块导出：将子模块的内容导出到 crate 根目录
pub mod connection;
pub mod error;
pub mod in_memory;
pub mod models;
pub mod postgres;
pub mod traits;

// 导出常用类型到 crate 根目录，方便外部引用
pub use connection::*;
pub use error::*;
pub use models::*;
pub use traits::*;

// 导出内存存储实现类型
pub use in_memory::{InMemoryDustbinStore, InMemoryNotificationStore};

// 导出 PostgreSQL 存储实现类型
pub use postgres::{PgDustbinStore, PgNotificationStore};
