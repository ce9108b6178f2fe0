//! ping handlers
//!
//! - POST /{device_id}/{epoch_time} - 记录一次 ping
//! - GET /{device_id}/{date} - 查询某天（UTC）的 ping
//! - GET /{device_id}/{from}/{to} - 查询区间 `[from, to)` 的 ping
//!
//! `device_id = all` 表示全部设备，返回设备到 ping 数组的映射。
//!
//! 两段路径的 GET 与 POST 共用一条路由 `/{device_id}/{token}`：
//! GET 时 token 是日期，POST 时 token 是 epoch 秒。

use crate::AppState;
use crate::utils::response::{empty_array_bad_request, empty_bad_request, empty_ok, query_response};
use axum::{
    extract::{Path, State},
    response::Response,
};
use domain::{DeviceSelector, resolve_date, resolve_range};
use tracing::debug;

#[derive(serde::Deserialize)]
pub struct DeviceTokenPath {
    device_id: String,
    token: String,
}

#[derive(serde::Deserialize)]
pub struct RangePath {
    device_id: String,
    from: String,
    to: String,
}

/// 记录 ping
///
/// # 错误处理
///
/// - `400 BAD REQUEST`：epoch 不是整数、设备 ID 为保留值 `all`、存储写入失败
pub async fn post_ping(State(state): State<AppState>, Path(path): Path<DeviceTokenPath>) -> Response {
    match state.pings.record_ping(&path.device_id, &path.token).await {
        Ok(_) => empty_ok(),
        Err(err) => {
            debug!(target: "ping.api", device_id = %path.device_id, error = %err, "ping_rejected");
            empty_bad_request()
        }
    }
}

/// 单日查询
///
/// token 只接受 `YYYY-MM-DD`，窗口为当天 UTC 午夜到次日午夜。
pub async fn get_date(State(state): State<AppState>, Path(path): Path<DeviceTokenPath>) -> Response {
    let window = match resolve_date(&path.token) {
        Ok(window) => window,
        Err(err) => {
            debug!(target: "ping.api", error = %err, "date_rejected");
            return empty_array_bad_request();
        }
    };
    let selector = DeviceSelector::parse(&path.device_id);
    query_response(state.pings.query(&selector, window).await)
}

/// 区间查询
///
/// `from` / `to` 各自可以是日期或 epoch 秒；`to` 为日期时包含当天全天。
pub async fn get_range(State(state): State<AppState>, Path(path): Path<RangePath>) -> Response {
    let window = match resolve_range(&path.from, &path.to) {
        Ok(window) => window,
        Err(err) => {
            debug!(target: "ping.api", error = %err, "range_rejected");
            return empty_array_bad_request();
        }
    };
    let selector = DeviceSelector::parse(&path.device_id);
    query_response(state.pings.query(&selector, window).await)
}
