//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照（MVP）。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub updates_applied: u64,
    pub update_failures: u64,
    pub notifications_created: u64,
    pub full_alerts: u64,
    pub battery_low_alerts: u64,
    pub simulation_runs: u64,
    pub simulated_bins: u64,
    pub stats_queries: u64,
}

/// 基础指标（MVP）。
pub struct TelemetryMetrics {
    updates_applied: AtomicU64,
    update_failures: AtomicU64,
    notifications_created: AtomicU64,
    full_alerts: AtomicU64,
    battery_low_alerts: AtomicU64,
    simulation_runs: AtomicU64,
    simulated_bins: AtomicU64,
    stats_queries: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            updates_applied: AtomicU64::new(0),
            update_failures: AtomicU64::new(0),
            notifications_created: AtomicU64::new(0),
            full_alerts: AtomicU64::new(0),
            battery_low_alerts: AtomicU64::new(0),
            simulation_runs: AtomicU64::new(0),
            simulated_bins: AtomicU64::new(0),
            stats_queries: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            updates_applied: self.updates_applied.load(Ordering::Relaxed),
            update_failures: self.update_failures.load(Ordering::Relaxed),
            notifications_created: self.notifications_created.load(Ordering::Relaxed),
            full_alerts: self.full_alerts.load(Ordering::Relaxed),
            battery_low_alerts: self.battery_low_alerts.load(Ordering::Relaxed),
            simulation_runs: self.simulation_runs.load(Ordering::Relaxed),
            simulated_bins: self.simulated_bins.load(Ordering::Relaxed),
            stats_queries: self.stats_queries.load(Ordering::Relaxed),
        }
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例（MVP）。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录状态更新成功次数。
pub fn record_update_applied() {
    metrics().updates_applied.fetch_add(1, Ordering::Relaxed);
}

/// 记录状态更新失败次数。
pub fn record_update_failure() {
    metrics().update_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录通知创建次数。
pub fn record_notification_created() {
    metrics()
        .notifications_created
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录满桶告警次数。
pub fn record_full_alert() {
    metrics().full_alerts.fetch_add(1, Ordering::Relaxed);
}

/// 记录低电量告警次数。
pub fn record_battery_low_alert() {
    metrics().battery_low_alerts.fetch_add(1, Ordering::Relaxed);
}

/// 记录模拟轮次与本轮覆盖的垃圾桶数。
pub fn record_simulation_run(bins: u64) {
    let metrics = metrics();
    metrics.simulation_runs.fetch_add(1, Ordering::Relaxed);
    metrics.simulated_bins.fetch_add(bins, Ordering::Relaxed);
}

/// 记录看板统计查询次数。
pub fn record_stats_query() {
    metrics().stats_queries.fetch_add(1, Ordering::Relaxed);
}
