//! 看板统计 handler
//!
//! - GET /dashboard/stats

use crate::AppState;
use crate::utils::response::fleet_error;
use api_contract::{ApiResponse, DashboardStatsDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 车队看板统计快照
pub async fn get_dashboard_stats(State(state): State<AppState>) -> Response {
    match state.aggregator.compute_stats().await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse::success(DashboardStatsDto {
                total_bins: stats.total_bins,
                full_bins: stats.full_bins,
                offline_bins: stats.offline_bins,
                low_battery_bins: stats.low_battery_bins,
                unread_notifications: stats.unread_notifications,
                avg_fill_level: stats.avg_fill_level,
                last_updated_ms: stats.last_updated_ms,
            })),
        )
            .into_response(),
        Err(err) => fleet_error(err),
    }
}
