//! Postgres ping 存储实现

use crate::error::StorageError;
use crate::traits::PingStore;
use crate::validation::ensure_device_id;
use domain::DeviceRecord;
use sqlx::{PgPool, Row};

pub struct PgPingStore {
    pub pool: PgPool,
}

impl PgPingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PingStore for PgPingStore {
    async fn insert_ping(&self, device_id: &str, ts: i64) -> Result<bool, StorageError> {
        ensure_device_id(device_id)?;
        let result = sqlx::query(
            "insert into device_pings (device_id, ts) values ($1, $2) \
             on conflict (device_id, ts) do nothing",
        )
        .bind(device_id)
        .bind(ts)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        let rows = sqlx::query(
            "select device_id, array_agg(ts) as pings \
             from device_pings \
             group by device_id \
             order by device_id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let device_id: String = row.try_get("device_id")?;
            let pings: Vec<i64> = row.try_get("pings")?;
            items.push(DeviceRecord::with_pings(device_id, pings));
        }
        Ok(items)
    }

    async fn find_device(&self, device_id: &str) -> Result<Option<DeviceRecord>, StorageError> {
        ensure_device_id(device_id)?;
        let rows = sqlx::query("select ts from device_pings where device_id = $1")
            .bind(device_id)
            .fetch_all(&self.pool)
            .await?;
        if rows.is_empty() {
            return Ok(None);
        }
        let mut pings = Vec::with_capacity(rows.len());
        for row in rows {
            pings.push(row.try_get::<i64, _>("ts")?);
        }
        Ok(Some(DeviceRecord::with_pings(device_id, pings)))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let result = sqlx::query("delete from device_pings")
            .execute(&self.pool)
            .await?;
        tracing::debug!(rows = result.rows_affected(), "device_pings cleared");
        Ok(())
    }
}
