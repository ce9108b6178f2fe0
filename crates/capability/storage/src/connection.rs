//! 数据库连接管理
//!
//! 提供数据库连接池初始化功能：
//! - connect_pool：建立 Postgres 连接池
//! - ensure_schema：建表（device_id + ts 复合主键保证集合语义）

use crate::error::StorageError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// 建立 Postgres 连接池
///
/// # 参数
/// - `database_url`：Postgres 连接字符串
/// - `max_connections`：连接池上限
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// 创建 `device_pings` 表（已存在时跳过）。
///
/// 复合主键 `(device_id, ts)` 使同一设备的重复 ping 在库内即被拒绝。
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        "create table if not exists device_pings ( \
            device_id text not null, \
            ts bigint not null, \
            primary key (device_id, ts) \
         )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
