//! HTTP 响应辅助函数
//!
//! 状态码约定：
//! - 查询失败（非法 token、设备不存在、存储不可用）统一 400，返回体 `[]`
//! - 写入 / 清空失败 400，空返回体
//! - 查询成功 200，返回体按选择符为数组或映射

use api_contract::PingsPayload;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ping_query::{QueryOutcome, RangeResult};

/// 200，空返回体
pub fn empty_ok() -> Response {
    StatusCode::OK.into_response()
}

/// 400，空返回体
pub fn empty_bad_request() -> Response {
    StatusCode::BAD_REQUEST.into_response()
}

/// 400，返回体 `[]`
pub fn empty_array_bad_request() -> Response {
    (StatusCode::BAD_REQUEST, Json(PingsPayload::empty())).into_response()
}

/// 查询结果转返回体
pub fn range_result_to_payload(result: RangeResult) -> PingsPayload {
    match result {
        RangeResult::Device(pings) => PingsPayload::Pings(pings),
        RangeResult::All(devices) => PingsPayload::from_devices(devices),
    }
}

/// 查询结果响应：客户端错误时 400，返回体仍为查询结果（此时为 `[]`）
pub fn query_response(outcome: QueryOutcome) -> Response {
    let status = if outcome.client_error {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(range_result_to_payload(outcome.result))).into_response()
}
