//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 服务信息（GET /）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfoDto {
    pub message: String,
    pub status: String,
    pub bins_count: u64,
}

/// 地理位置。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// 垃圾桶创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDustbinRequest {
    pub name: String,
    pub location: LocationDto,
}

/// 垃圾桶更新请求体（传感器上报，所有字段均为可选的部分更新）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDustbinRequest {
    pub name: Option<String>,
    pub fill_level: Option<f64>,
    pub battery_level: Option<f64>,
    pub status: Option<String>,
    pub is_full: Option<bool>,
}

/// 垃圾桶返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DustbinDto {
    pub dustbin_id: String,
    pub name: String,
    pub location: LocationDto,
    pub fill_level: f64,
    pub battery_level: f64,
    pub status: String,
    pub is_full: bool,
    pub temperature: f64,
    pub humidity: f64,
    pub last_updated_ms: i64,
}

/// 通知创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub dustbin_id: String,
    pub dustbin_name: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Option<String>,
}

/// 通知返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub notification_id: String,
    pub dustbin_id: String,
    pub dustbin_name: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub ts_ms: i64,
    pub is_read: bool,
}

/// 通知列表查询参数。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsQuery {
    pub limit: Option<i64>,
    pub unread_only: Option<bool>,
}

/// 看板统计返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_bins: u64,
    pub full_bins: u64,
    pub offline_bins: u64,
    pub low_battery_bins: u64,
    pub unread_notifications: u64,
    pub avg_fill_level: f64,
    pub last_updated_ms: i64,
}

/// 传感器模拟执行结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateReportDto {
    pub message: String,
    pub updated_bins: u64,
    pub ts_ms: i64,
}

/// 演示数据初始化结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReportDto {
    pub message: String,
    pub bins: u64,
}

/// Telemetry 指标快照返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub updates_applied: u64,
    pub update_failures: u64,
    pub notifications_created: u64,
    pub full_alerts: u64,
    pub battery_low_alerts: u64,
    pub simulation_runs: u64,
    pub simulated_bins: u64,
    pub stats_queries: u64,
}
