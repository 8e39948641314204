//! # SDI Fleet 模块
//!
//! 垃圾桶状态管理核心：阈值告警派生、看板聚合与传感器模拟。
//!
//! ## 模块说明
//!
//! - [`rules`]：纯函数的阈值规则求值。输入当前状态 + 部分更新，
//!   输出待创建的通知事件与强制满桶标记，不接触存储，可独立测试。
//! - [`manager`]：`BinStateManager`。一次更新的完整事务序列：
//!   读取当前状态 → 规则求值 → 创建通知 → 持久化合并字段 → 返回新状态。
//! - [`stats`]：`FleetAggregator`。组合存储层聚合原语计算看板统计。
//! - [`simulate`]：传感器随机游走驱动。随机源通过 [`simulate::NoiseSource`]
//!   注入，测试可使用确定性序列。
//! - [`demo`]：演示数据初始化（清空两个集合并播种固定城市点位）。
//!
//! ## 一致性口径
//!
//! 通知创建与垃圾桶写入之间不构成事务：通知先行创建，之后的垃圾桶
//! 写入失败不回滚已创建的通知（接受的不一致窗口）。并发更新同一
//! 垃圾桶时按最后写入生效，通知消息中的桶名取更新前快照，允许短暂陈旧。

pub mod demo;
pub mod manager;
pub mod rules;
pub mod simulate;
pub mod stats;

pub use demo::seed_demo_data;
pub use manager::{BinStateManager, FleetError};
pub use rules::{PendingNotification, RuleOutcome, evaluate_thresholds};
pub use simulate::{FleetSimulator, NoiseSource, SimulationReport, ThreadRngNoise};
pub use stats::{FleetAggregator, FleetStats};
