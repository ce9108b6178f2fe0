//! 验证辅助函数
//!
//! - ensure_device_id：设备 ID 非空

use crate::error::StorageError;

/// 验证设备 ID 非空。
pub fn ensure_device_id(device_id: &str) -> Result<(), StorageError> {
    if device_id.is_empty() {
        return Err(StorageError::new("device_id required"));
    }
    Ok(())
}
