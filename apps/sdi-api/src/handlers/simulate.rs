//! 传感器模拟 handler
//!
//! - POST /simulate/iot-data

use crate::AppState;
use crate::utils::response::{fleet_error, storage_error};
use api_contract::{ApiResponse, SimulateReportDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sdi_fleet::ThreadRngNoise;

/// 对车队内全部垃圾桶各推进一步随机游走
pub async fn simulate_iot_data(State(state): State<AppState>) -> Response {
    let bins = match state.dustbin_store.list_dustbins().await {
        Ok(bins) => bins,
        Err(err) => return storage_error(err),
    };
    let mut noise = ThreadRngNoise::new();
    match state.simulator.simulate_all(&bins, &mut noise).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(SimulateReportDto {
                message: format!("Simulated IoT updates for {} dustbins", report.updated_bins),
                updated_bins: report.updated_bins,
                ts_ms: report.ts_ms,
            })),
        )
            .into_response(),
        Err(err) => fleet_error(err),
    }
}
