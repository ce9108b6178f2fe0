//! ping 服务 HTTP 入口：记录设备 ping，按日期 / epoch 区间查询。

mod handlers;
mod middleware;
mod routes;
mod utils;

use axum::Router;
use ping_config::{AppConfig, StoreBackend};
use ping_query::PingQueryService;
use ping_storage::{
    InMemoryPingStore, PgPingStore, PingStore, RedisPingStore, StorageError, connect_pool,
    ensure_schema,
};
use ping_telemetry::init_tracing;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 所有 handler 共享的状态；存储实例通过查询服务注入。
#[derive(Clone)]
pub struct AppState {
    pub pings: PingQueryService,
}

impl AppState {
    pub fn new(store: Arc<dyn PingStore>) -> Self {
        Self {
            pings: PingQueryService::new(store),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let store = build_store(&config.store).await?;
    let app = build_app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(
        addr = %config.http_addr,
        backend = config.store.name(),
        "listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// 组装路由、状态与中间件。
pub fn build_app(state: AppState) -> Router {
    routes::create_api_router()
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(axum::middleware::from_fn(middleware::request_context))
        .layer(TraceLayer::new_for_http())
}

/// 按配置创建存储后端。
async fn build_store(backend: &StoreBackend) -> Result<Arc<dyn PingStore>, StorageError> {
    let store: Arc<dyn PingStore> = match backend {
        StoreBackend::Memory => Arc::new(InMemoryPingStore::new()),
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = connect_pool(database_url, *max_connections).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgPingStore::new(pool))
        }
        StoreBackend::Redis {
            redis_url,
            key_prefix,
        } => Arc::new(RedisPingStore::connect(redis_url, key_prefix)?),
    };
    Ok(store)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "shutdown signal listener failed");
        return;
    }
    info!("shutting down");
}
