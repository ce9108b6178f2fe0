//! 稳定的线上 JSON 契约。
//!
//! 查询接口的返回体按选择符不同而形态不同：
//! - 单设备：时间戳数组 `[1, 2, 3]`
//! - `all`：设备 ID 到时间戳数组的映射 `{"a": [1]}`
//!
//! 两种形态保持各自独立，不统一为同一结构，已有客户端依赖这一差异。

use serde::Serialize;
use std::collections::BTreeMap;

/// ping 查询返回体。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PingsPayload {
    Pings(Vec<i64>),
    Devices(BTreeMap<String, Vec<i64>>),
}

impl PingsPayload {
    /// 空数组 `[]`，也是所有查询失败时的返回体。
    pub fn empty() -> Self {
        Self::Pings(Vec::new())
    }

    /// `all` 查询的返回体；没有任何设备命中时退化为 `[]`。
    pub fn from_devices(devices: BTreeMap<String, Vec<i64>>) -> Self {
        if devices.is_empty() {
            Self::empty()
        } else {
            Self::Devices(devices)
        }
    }
}

/// `GET /devices` 返回体。
pub type DeviceIdsPayload = Vec<String>;

/// 计数器快照返回结构。
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub pings_inserted: u64,
    pub pings_duplicate: u64,
    pub pings_rejected: u64,
    pub queries_served: u64,
    pub queries_rejected: u64,
    pub store_failures: u64,
}
