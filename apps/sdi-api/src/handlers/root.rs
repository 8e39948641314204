//! 服务信息与健康检查 handlers
//!
//! - GET / - 服务信息（含当前垃圾桶数量）
//! - GET /health - 健康检查

use crate::AppState;
use crate::utils::response::storage_error;
use api_contract::{ApiResponse, ServiceInfoDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 服务信息
pub async fn service_info(State(state): State<AppState>) -> Response {
    match state.dustbin_store.count_dustbins().await {
        Ok(bins_count) => (
            StatusCode::OK,
            Json(ApiResponse::success(ServiceInfoDto {
                message: "Smart Dustbin IoT API".to_string(),
                status: "active".to_string(),
                bins_count,
            })),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
