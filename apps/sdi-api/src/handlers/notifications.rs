//! 通知 handlers
//!
//! - POST /notifications - 手工创建通知
//! - GET /notifications - 列出通知（?limit=&unreadOnly=）
//! - PUT /notifications/{id}/read - 标记已读（幂等）

use crate::AppState;
use crate::utils::normalize_required;
use crate::utils::response::{
    bad_request_error, not_found_error, notification_to_dto, storage_error,
};
use api_contract::{ApiResponse, CreateNotificationRequest, NotificationDto, NotificationsQuery};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{NotificationKind, NotificationPriority, now_epoch_ms};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct NotificationPath {
    notification_id: String,
}

/// 手工创建通知
///
/// 阈值派生之外的补充入口（运维广播等）。priority 缺省为 medium。
pub async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Response {
    let dustbin_id = match normalize_required(req.dustbin_id, "dustbinId") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let dustbin_name = match normalize_required(req.dustbin_name, "dustbinName") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let message = match normalize_required(req.message, "message") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let kind = match NotificationKind::parse(&req.kind) {
        Some(kind) => kind,
        None => return bad_request_error(format!("unknown type: {}", req.kind)),
    };
    let priority = match req.priority {
        Some(value) => match NotificationPriority::parse(&value) {
            Some(priority) => priority,
            None => return bad_request_error(format!("unknown priority: {value}")),
        },
        None => NotificationPriority::Medium,
    };
    let record = sdi_storage::NotificationRecord {
        notification_id: Uuid::new_v4().to_string(),
        dustbin_id,
        dustbin_name,
        message,
        kind,
        priority,
        ts_ms: now_epoch_ms(),
        is_read: false,
    };
    match state.notification_store.create_notification(record).await {
        Ok(item) => (
            StatusCode::OK,
            Json(ApiResponse::success(notification_to_dto(item))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 列出通知（最新在前）
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationsQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(state.notifications_default_limit);
    if limit < 0 {
        return bad_request_error("limit out of range");
    }
    let unread_only = query.unread_only.unwrap_or(false);
    match state
        .notification_store
        .list_notifications(unread_only, limit)
        .await
    {
        Ok(items) => {
            let data: Vec<NotificationDto> = items.into_iter().map(notification_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 标记通知已读（重复标记返回成功）
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(path): Path<NotificationPath>,
) -> Response {
    match state
        .notification_store
        .mark_read(&path.notification_id)
        .await
    {
        Ok(true) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
