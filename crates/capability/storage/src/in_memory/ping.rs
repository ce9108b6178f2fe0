//! ping 内存存储实现
//!
//! 功能：
//! - 每设备一个 `HashSet<i64>`，写入天然去重
//! - 设备按 ID 有序保存，快照顺序稳定

use crate::error::StorageError;
use crate::traits::PingStore;
use crate::validation::ensure_device_id;
use domain::DeviceRecord;
use std::collections::{BTreeMap, HashSet};
use std::sync::RwLock;

/// ping 内存存储
///
/// 使用 RwLock + BTreeMap 提供线程安全的内存存储。写锁内完成集合插入，
/// 同一设备的并发写入不会丢失。
pub struct InMemoryPingStore {
    devices: RwLock<BTreeMap<String, HashSet<i64>>>,
}

impl InMemoryPingStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(BTreeMap::new()),
        }
    }

    /// 当前设备数量；锁中毒时返回错误
    pub fn len(&self) -> Result<usize, StorageError> {
        let map = self
            .devices
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryPingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PingStore for InMemoryPingStore {
    async fn insert_ping(&self, device_id: &str, ts: i64) -> Result<bool, StorageError> {
        ensure_device_id(device_id)?;
        let mut map = self
            .devices
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.entry(device_id.to_string()).or_default().insert(ts))
    }

    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        let map = self
            .devices
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map
            .iter()
            .map(|(device_id, pings)| DeviceRecord {
                device_id: device_id.clone(),
                pings: pings.clone(),
            })
            .collect())
    }

    async fn find_device(&self, device_id: &str) -> Result<Option<DeviceRecord>, StorageError> {
        ensure_device_id(device_id)?;
        let map = self
            .devices
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.get(device_id).map(|pings| DeviceRecord {
            device_id: device_id.to_string(),
            pings: pings.clone(),
        }))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut map = self
            .devices
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.clear();
        Ok(())
    }
}
