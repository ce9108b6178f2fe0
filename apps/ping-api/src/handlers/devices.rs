//! 设备 handlers
//!
//! - GET /devices - 列出所有已知设备 ID
//! - POST /clear_data - 删除全部设备与 ping

use crate::AppState;
use crate::utils::response::{empty_array_bad_request, empty_bad_request, empty_ok};
use api_contract::DeviceIdsPayload;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

/// 列出设备
///
/// 成功时返回 `200 OK` 和设备 ID 数组；存储扫描失败时返回 `400` 和 `[]`。
pub async fn list_devices(State(state): State<AppState>) -> Response {
    match state.pings.list_device_ids().await {
        Ok(ids) => {
            let data: DeviceIdsPayload = ids;
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(_) => empty_array_bad_request(),
    }
}

/// 清空数据
///
/// 与并发写入之间没有事务保证，清空期间写入的 ping 可能保留也可能丢失。
pub async fn clear_data(State(state): State<AppState>) -> Response {
    match state.pings.clear().await {
        Ok(()) => {
            info!(target: "ping.api", "data_cleared");
            empty_ok()
        }
        Err(_) => empty_bad_request(),
    }
}
