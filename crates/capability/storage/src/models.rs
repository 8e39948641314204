//! 数据模型
//!
//! 定义所有存储相关的数据模型和更新结构：
//! - 垃圾桶模型：DustbinRecord, DustbinUpdate
//! - 通知模型：NotificationRecord

use domain::{BinStatus, NotificationKind, NotificationPriority};

/// 垃圾桶记录（最新状态，无历史时序）。
///
/// 约束：
/// - `dustbin_id` 创建后不可变
/// - 位置三元组（latitude/longitude/address）创建后不可变，更新路径不触碰
/// - `fill_level`/`battery_level`/`humidity` 的取值范围 [0,100] 由写入方保证，
///   存储层读取时不做二次截断
/// - `is_full` 为派生字段，任何带 `fill_level` 的已提交更新之后必须满足
///   `is_full == (fill_level >= 90)`
#[derive(Debug, Clone)]
pub struct DustbinRecord {
    pub dustbin_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub fill_level: f64,
    pub battery_level: f64,
    pub status: BinStatus,
    pub is_full: bool,
    pub temperature: f64,
    pub humidity: f64,
    pub last_updated_ms: i64,
}

/// 垃圾桶部分更新输入。
///
/// 所有字段均为可选：缺省字段保持原值（merge 而非 replace）。
#[derive(Debug, Clone, Default)]
pub struct DustbinUpdate {
    pub name: Option<String>,
    pub fill_level: Option<f64>,
    pub battery_level: Option<f64>,
    pub status: Option<BinStatus>,
    pub is_full: Option<bool>,
}

/// 通知记录。
///
/// 内容创建后不可变；`dustbin_name` 为创建时刻的冗余快照，
/// 之后垃圾桶改名不会回写。只有 `is_read` 可以置为 true。
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub notification_id: String,
    pub dustbin_id: String,
    pub dustbin_name: String,
    pub message: String,
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub ts_ms: i64,
    pub is_read: bool,
}
