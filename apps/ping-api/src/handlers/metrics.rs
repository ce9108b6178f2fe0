//! 计数器快照
//!
//! - GET /metrics

use api_contract::MetricsSnapshotDto;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ping_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(MetricsSnapshotDto {
            pings_inserted: snapshot.pings_inserted,
            pings_duplicate: snapshot.pings_duplicate,
            pings_rejected: snapshot.pings_rejected,
            queries_served: snapshot.queries_served,
            queries_rejected: snapshot.queries_rejected,
            store_failures: snapshot.store_failures,
        }),
    )
        .into_response()
}
