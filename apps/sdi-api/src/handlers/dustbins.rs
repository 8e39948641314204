//! 垃圾桶 CRUD handlers
//!
//! 提供垃圾桶资源的增删改查接口：
//! - GET /dustbins - 列出垃圾桶
//! - POST /dustbins - 注册垃圾桶
//! - GET /dustbins/{id} - 获取垃圾桶详情
//! - PUT /dustbins/{id} - 部分更新（传感器上报入口，触发阈值规则）
//! - DELETE /dustbins/{id} - 删除垃圾桶
//!
//! 验证约定：
//! - name 必填且非空
//! - fillLevel/batteryLevel 取值范围 [0, 100]
//! - status 仅接受 online/offline/maintenance

use crate::AppState;
use crate::utils::response::{
    bad_request_error, dustbin_to_dto, fleet_error, not_found_error, storage_error,
};
use crate::utils::{check_percentage, normalize_optional, normalize_required};
use api_contract::{ApiResponse, CreateDustbinRequest, DustbinDto, UpdateDustbinRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{BinStatus, now_epoch_ms};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct DustbinPath {
    dustbin_id: String,
}

/// 列出垃圾桶
pub async fn list_dustbins(State(state): State<AppState>) -> Response {
    match state.dustbin_store.list_dustbins().await {
        Ok(items) => {
            let data: Vec<DustbinDto> = items.into_iter().map(dustbin_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 注册垃圾桶
///
/// 传感器初始值取注册默认：填充率 0、电量 100、在线、温度 20、湿度 50。
pub async fn create_dustbin(
    State(state): State<AppState>,
    Json(req): Json<CreateDustbinRequest>,
) -> Response {
    let name = match normalize_required(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let address = match normalize_required(req.location.address, "location.address") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let record = sdi_storage::DustbinRecord {
        dustbin_id: Uuid::new_v4().to_string(),
        name,
        latitude: req.location.latitude,
        longitude: req.location.longitude,
        address,
        fill_level: 0.0,
        battery_level: 100.0,
        status: BinStatus::Online,
        is_full: false,
        temperature: 20.0,
        humidity: 50.0,
        last_updated_ms: now_epoch_ms(),
    };
    match state.dustbin_store.create_dustbin(record).await {
        Ok(item) => (
            StatusCode::OK,
            Json(ApiResponse::success(dustbin_to_dto(item))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 获取垃圾桶详情
pub async fn get_dustbin(
    State(state): State<AppState>,
    Path(path): Path<DustbinPath>,
) -> Response {
    match state.dustbin_store.find_dustbin(&path.dustbin_id).await {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(ApiResponse::success(dustbin_to_dto(item))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 部分更新垃圾桶（传感器上报入口）
///
/// 经由状态管理器执行：阈值命中时派生通知，填充率达到满桶阈值时
/// `isFull` 强制置位。
pub async fn update_dustbin(
    State(state): State<AppState>,
    Path(path): Path<DustbinPath>,
    Json(req): Json<UpdateDustbinRequest>,
) -> Response {
    let name = match normalize_optional(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let fill_level = match check_percentage(req.fill_level, "fillLevel") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let battery_level = match check_percentage(req.battery_level, "batteryLevel") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let status = match req.status {
        Some(value) => match BinStatus::parse(&value) {
            Some(status) => Some(status),
            None => return bad_request_error(format!("unknown status: {value}")),
        },
        None => None,
    };
    // 全空的更新集也被接受：仅刷新 last_updated
    let update = sdi_storage::DustbinUpdate {
        name,
        fill_level,
        battery_level,
        status,
        is_full: req.is_full,
    };
    match state.manager.apply_update(&path.dustbin_id, update).await {
        Ok(item) => (
            StatusCode::OK,
            Json(ApiResponse::success(dustbin_to_dto(item))),
        )
            .into_response(),
        Err(err) => fleet_error(err),
    }
}

/// 删除垃圾桶
///
/// 既有通知不随之删除，保留为历史记录。
pub async fn delete_dustbin(
    State(state): State<AppState>,
    Path(path): Path<DustbinPath>,
) -> Response {
    match state.dustbin_store.delete_dustbin(&path.dustbin_id).await {
        Ok(true) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
