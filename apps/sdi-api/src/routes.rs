//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 服务信息：/
//! - 健康检查：/health
//! - 垃圾桶管理：/dustbins/*
//! - 通知管理：/notifications/*
//! - 看板统计：/dashboard/stats
//! - 传感器模拟：/simulate/iot-data
//! - 演示数据：/initialize-demo-data
//! - 指标快照：/metrics

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post, put},
};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，调用方以裸路径与 /api 前缀各挂载一份
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/dustbins", get(list_dustbins).post(create_dustbin))
        .route(
            "/dustbins/:dustbin_id",
            get(get_dustbin).put(update_dustbin).delete(delete_dustbin),
        )
        .route(
            "/notifications",
            get(list_notifications).post(create_notification),
        )
        .route(
            "/notifications/:notification_id/read",
            put(mark_notification_read),
        )
        .route("/dashboard/stats", get(get_dashboard_stats))
        .route("/simulate/iot-data", post(simulate_iot_data))
        .route("/initialize-demo-data", post(initialize_demo_data))
        .route("/metrics", get(get_metrics))
}
