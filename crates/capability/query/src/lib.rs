//! 区间查询引擎与设备列表。
//!
//! - `query` / `try_query`：按选择符（单设备 / `all`）在时间窗口内过滤 ping
//! - `list_device_ids`：列出已知设备 ID
//! - `record_ping`：解析 epoch 并写入 ping
//! - `clear`：清空全部设备

use domain::{DeviceSelector, RESERVED_ALL_SELECTOR, TimeWindow, WindowError, parse_epoch};
use ping_storage::{PingStore, StorageError};
use ping_telemetry::{
    record_ping_duplicate, record_ping_inserted, record_ping_rejected, record_query_rejected,
    record_query_served, record_store_failure,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// 查询错误。
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("device not found: {0}")]
    DeviceNotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// ping 写入错误。
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    InvalidEpoch(#[from] WindowError),
    #[error("device id is reserved: {0}")]
    ReservedDeviceId(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// 查询结果。
///
/// 单设备返回扁平序列（无命中时为空序列）；`all` 返回设备到命中序列的映射，
/// 只包含命中非空的设备。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeResult {
    Device(Vec<i64>),
    All(BTreeMap<String, Vec<i64>>),
}

impl RangeResult {
    pub fn empty() -> Self {
        Self::Device(Vec::new())
    }
}

/// 查询结果与客户端错误标记。
///
/// `client_error` 仅在查询失败（设备不存在、存储不可用）时为真；
/// 设备存在但窗口内没有 ping 时结果同样为空，但不是错误。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub result: RangeResult,
    pub client_error: bool,
}

/// 保留 `window.start <= t < window.end` 的 ping，升序返回。
pub fn filter_in_window<'a>(
    pings: impl IntoIterator<Item = &'a i64>,
    window: TimeWindow,
) -> Vec<i64> {
    let mut selected: Vec<i64> = pings
        .into_iter()
        .copied()
        .filter(|ts| window.contains(*ts))
        .collect();
    selected.sort_unstable();
    selected
}

/// ping 查询服务（持有注入的存储实例）。
#[derive(Clone)]
pub struct PingQueryService {
    store: Arc<dyn PingStore>,
}

impl PingQueryService {
    pub fn new(store: Arc<dyn PingStore>) -> Self {
        Self { store }
    }

    /// 执行区间查询，失败时返回具体错误。
    pub async fn try_query(
        &self,
        selector: &DeviceSelector,
        window: TimeWindow,
    ) -> Result<RangeResult, QueryError> {
        match selector {
            DeviceSelector::Device(device_id) => {
                let device = self
                    .store
                    .find_device(device_id)
                    .await?
                    .ok_or_else(|| QueryError::DeviceNotFound(device_id.clone()))?;
                Ok(RangeResult::Device(filter_in_window(&device.pings, window)))
            }
            DeviceSelector::All => {
                let devices = self.store.list_devices().await?;
                let mut matched = BTreeMap::new();
                for device in devices {
                    let pings = filter_in_window(&device.pings, window);
                    if !pings.is_empty() {
                        matched.insert(device.device_id, pings);
                    }
                }
                Ok(RangeResult::All(matched))
            }
        }
    }

    /// 执行区间查询；任何错误都折叠为空结果加客户端错误标记。
    pub async fn query(&self, selector: &DeviceSelector, window: TimeWindow) -> QueryOutcome {
        match self.try_query(selector, window).await {
            Ok(result) => {
                record_query_served();
                QueryOutcome {
                    result,
                    client_error: false,
                }
            }
            Err(err) => {
                if matches!(err, QueryError::Storage(_)) {
                    record_store_failure();
                }
                record_query_rejected();
                warn!(
                    target: "ping.query",
                    selector = ?selector,
                    start = window.start,
                    end = window.end,
                    error = %err,
                    "query_failed"
                );
                QueryOutcome {
                    result: RangeResult::empty(),
                    client_error: true,
                }
            }
        }
    }

    /// 列出已知设备 ID（存储快照顺序）。
    pub async fn list_device_ids(&self) -> Result<Vec<String>, StorageError> {
        let devices = self.store.list_devices().await.inspect_err(|err| {
            record_store_failure();
            warn!(target: "ping.query", error = %err, "list_devices_failed");
        })?;
        Ok(devices.into_iter().map(|device| device.device_id).collect())
    }

    /// 解析 epoch token 并写入 ping。
    ///
    /// 返回 `true` 表示新增，`false` 表示重复。存储失败只影响本次请求。
    pub async fn record_ping(&self, device_id: &str, epoch: &str) -> Result<bool, IngestError> {
        if device_id == RESERVED_ALL_SELECTOR {
            record_ping_rejected();
            return Err(IngestError::ReservedDeviceId(device_id.to_string()));
        }
        let ts = parse_epoch(epoch).inspect_err(|_| record_ping_rejected())?;
        let added = self.store.insert_ping(device_id, ts).await.inspect_err(|err| {
            record_store_failure();
            warn!(
                target: "ping.ingest",
                device_id = %device_id,
                ts = ts,
                error = %err,
                "insert_failed"
            );
        })?;
        if added {
            record_ping_inserted();
        } else {
            record_ping_duplicate();
        }
        debug!(target: "ping.ingest", device_id = %device_id, ts = ts, added, "ping_recorded");
        Ok(added)
    }

    /// 删除全部设备记录。
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.clear().await.inspect_err(|err| {
            record_store_failure();
            warn!(target: "ping.ingest", error = %err, "clear_failed");
        })
    }
}
