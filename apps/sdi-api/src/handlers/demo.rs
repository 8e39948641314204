//! 演示数据初始化 handler
//!
//! - POST /initialize-demo-data

use crate::AppState;
use crate::utils::response::fleet_error;
use api_contract::{ApiResponse, SeedReportDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sdi_fleet::{ThreadRngNoise, seed_demo_data};

/// 清空现有数据并播种演示车队
pub async fn initialize_demo_data(State(state): State<AppState>) -> Response {
    let mut noise = ThreadRngNoise::new();
    match seed_demo_data(
        state.dustbin_store.as_ref(),
        state.notification_store.as_ref(),
        &mut noise,
    )
    .await
    {
        Ok(bins) => (
            StatusCode::OK,
            Json(ApiResponse::success(SeedReportDto {
                message: format!("Initialized {bins} demo dustbins"),
                bins,
            })),
        )
            .into_response(),
        Err(err) => fleet_error(err),
    }
}
