//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：bad_request_error, not_found_error, storage_error, fleet_error
//! - DTO 转换：dustbin_to_dto, notification_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - DTO 转换保持 Record 和 DTO 字段一致

use api_contract::{ApiResponse, DustbinDto, LocationDto, NotificationDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sdi_fleet::FleetError;
use sdi_storage::{DustbinRecord, NotificationRecord, StorageError};

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 状态管理流程错误响应（NotFound 映射 404，其余映射 500）
pub fn fleet_error(err: FleetError) -> Response {
    match err {
        FleetError::NotFound => not_found_error(),
        FleetError::Storage(err) => storage_error(err),
    }
}

/// DustbinRecord 转 DustbinDto
pub fn dustbin_to_dto(record: DustbinRecord) -> DustbinDto {
    DustbinDto {
        dustbin_id: record.dustbin_id,
        name: record.name,
        location: LocationDto {
            latitude: record.latitude,
            longitude: record.longitude,
            address: record.address,
        },
        fill_level: record.fill_level,
        battery_level: record.battery_level,
        status: record.status.as_str().to_string(),
        is_full: record.is_full,
        temperature: record.temperature,
        humidity: record.humidity,
        last_updated_ms: record.last_updated_ms,
    }
}

/// NotificationRecord 转 NotificationDto
pub fn notification_to_dto(record: NotificationRecord) -> NotificationDto {
    NotificationDto {
        notification_id: record.notification_id,
        dustbin_id: record.dustbin_id,
        dustbin_name: record.dustbin_name,
        message: record.message,
        kind: record.kind.as_str().to_string(),
        priority: record.priority.as_str().to_string(),
        ts_ms: record.ts_ms,
        is_read: record.is_read,
    }
}
