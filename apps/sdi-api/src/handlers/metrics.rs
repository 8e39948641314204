//! Telemetry 指标快照（MVP）。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sdi_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            updates_applied: snapshot.updates_applied,
            update_failures: snapshot.update_failures,
            notifications_created: snapshot.notifications_created,
            full_alerts: snapshot.full_alerts,
            battery_low_alerts: snapshot.battery_low_alerts,
            simulation_runs: snapshot.simulation_runs,
            simulated_bins: snapshot.simulated_bins,
            stats_queries: snapshot.stats_queries,
        })),
    )
        .into_response()
}
