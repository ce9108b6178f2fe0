//! 追踪、请求 ID 生成与进程级计数器。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 计数器快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub pings_inserted: u64,
    pub pings_duplicate: u64,
    pub pings_rejected: u64,
    pub queries_served: u64,
    pub queries_rejected: u64,
    pub store_failures: u64,
}

/// 进程级计数器。
pub struct TelemetryMetrics {
    pings_inserted: AtomicU64,
    pings_duplicate: AtomicU64,
    pings_rejected: AtomicU64,
    queries_served: AtomicU64,
    queries_rejected: AtomicU64,
    store_failures: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            pings_inserted: AtomicU64::new(0),
            pings_duplicate: AtomicU64::new(0),
            pings_rejected: AtomicU64::new(0),
            queries_served: AtomicU64::new(0),
            queries_rejected: AtomicU64::new(0),
            store_failures: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            pings_inserted: self.pings_inserted.load(Ordering::Relaxed),
            pings_duplicate: self.pings_duplicate.load(Ordering::Relaxed),
            pings_rejected: self.pings_rejected.load(Ordering::Relaxed),
            queries_served: self.queries_served.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局计数器实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info，可用 RUST_LOG 覆盖）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录新增 ping 次数。
pub fn record_ping_inserted() {
    metrics().pings_inserted.fetch_add(1, Ordering::Relaxed);
}

/// 记录重复 ping（已存在，未新增）次数。
pub fn record_ping_duplicate() {
    metrics().pings_duplicate.fetch_add(1, Ordering::Relaxed);
}

/// 记录被拒绝的 ping 写入（非法 epoch、保留 ID）。
pub fn record_ping_rejected() {
    metrics().pings_rejected.fetch_add(1, Ordering::Relaxed);
}

/// 记录成功的查询次数。
pub fn record_query_served() {
    metrics().queries_served.fetch_add(1, Ordering::Relaxed);
}

/// 记录以客户端错误结束的查询次数。
pub fn record_query_rejected() {
    metrics().queries_rejected.fetch_add(1, Ordering::Relaxed);
}

/// 记录存储层失败次数。
pub fn record_store_failure() {
    metrics().store_failures.fetch_add(1, Ordering::Relaxed);
}
