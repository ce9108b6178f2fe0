//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers：
//! - 健康检查：/health
//! - 计数器：/metrics
//! - 设备：/devices, /clear_data
//! - ping：/{device_id}/{token}（GET 日期查询，POST 写入），/{device_id}/{from}/{to}

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/clear_data", post(clear_data))
        .route("/devices", get(list_devices))
        .route("/:device_id/:token", get(get_date).post(post_ping))
        .route("/:device_id/:from/:to", get(get_range))
}
