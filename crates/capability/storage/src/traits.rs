//! 存储接口 Trait 定义
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发（handler 持有 `Arc<dyn PingStore>`）

use crate::error::StorageError;
use async_trait::async_trait;
use domain::DeviceRecord;

/// ping 存储接口
///
/// 每个设备一条记录，ping 以集合语义保存。设备记录在首次写入时隐式创建，
/// 只会被 `clear` 整体删除。
#[async_trait]
pub trait PingStore: Send + Sync {
    /// 幂等写入一个 ping；设备不存在时创建。
    ///
    /// 返回 `true` 表示新增，`false` 表示该时间戳已存在。
    async fn insert_ping(&self, device_id: &str, ts: i64) -> Result<bool, StorageError>;

    /// 读取调用时刻所有设备记录的快照。
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError>;

    /// 查找指定设备，不存在时返回 `None`。
    async fn find_device(&self, device_id: &str) -> Result<Option<DeviceRecord>, StorageError>;

    /// 删除全部设备记录。
    async fn clear(&self) -> Result<(), StorageError>;
}
