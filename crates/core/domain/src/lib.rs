pub mod window;

pub use window::{
    TimeWindow, WindowError, midnight_epoch, parse_date, parse_epoch, resolve_date, resolve_range,
};

use std::collections::HashSet;

/// 查询时代表“全部设备”的保留选择符，不是合法的设备 ID。
pub const RESERVED_ALL_SELECTOR: &str = "all";

/// 设备记录：设备 ID 与其去重后的 ping 集合（epoch 秒）。
///
/// 集合无序；迭代顺序不保证在多次操作之间稳定。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceRecord {
    pub device_id: String,
    pub pings: HashSet<i64>,
}

impl DeviceRecord {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            pings: HashSet::new(),
        }
    }

    /// 以给定 ping 构造记录（重复值自动合并）。
    pub fn with_pings(device_id: impl Into<String>, pings: impl IntoIterator<Item = i64>) -> Self {
        Self {
            device_id: device_id.into(),
            pings: pings.into_iter().collect(),
        }
    }
}

/// 查询目标：单个设备或全部设备。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    All,
    Device(String),
}

impl DeviceSelector {
    /// 路径参数 `all` 解析为全部设备，其余原样作为设备 ID。
    pub fn parse(value: &str) -> Self {
        if value == RESERVED_ALL_SELECTOR {
            Self::All
        } else {
            Self::Device(value.to_string())
        }
    }
}
