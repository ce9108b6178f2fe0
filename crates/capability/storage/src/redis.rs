//! Redis ping 存储实现
//!
//! 键布局：
//! - `{prefix}:devices`：设备 ID 注册表（SET）
//! - `{prefix}:device:{device_id}:pings`：设备的 ping（SET）
//!
//! 写入用 MULTI 包裹两条 SADD，注册表与 ping 集合同时生效。
//! 清空用 Lua 脚本在服务端一步完成读注册表与删除，避免与首次写入交错。

use crate::error::StorageError;
use crate::traits::PingStore;
use crate::validation::ensure_device_id;
use domain::DeviceRecord;
use redis::AsyncCommands;
use std::sync::OnceLock;

/// 清空脚本：KEYS[1] 为注册表，ARGV[1]/ARGV[2] 为 ping 键的前后缀
const CLEAR_SCRIPT: &str = r#"
local ids = redis.call('SMEMBERS', KEYS[1])
for _, id in ipairs(ids) do
  redis.call('DEL', ARGV[1] .. id .. ARGV[2])
end
redis.call('DEL', KEYS[1])
return #ids
"#;

const PINGS_KEY_SUFFIX: &str = ":pings";

/// Redis ping 存储
pub struct RedisPingStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisPingStore {
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    pub fn connect(redis_url: &str, key_prefix: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self::new(client, key_prefix))
    }

    fn registry_key(&self) -> String {
        format!("{}:devices", self.key_prefix)
    }

    fn pings_key_head(&self) -> String {
        format!("{}:device:", self.key_prefix)
    }

    fn pings_key(&self, device_id: &str) -> String {
        format!("{}{}{}", self.pings_key_head(), device_id, PINGS_KEY_SUFFIX)
    }

    /// 清空脚本的 KEYS[1] 与 ARGV[1]
    fn clear_script_args(&self) -> (String, String) {
        (self.registry_key(), self.pings_key_head())
    }

    fn clear_invocation(&self) -> redis::ScriptInvocation<'static> {
        static SCRIPT: OnceLock<redis::Script> = OnceLock::new();
        let (registry, head) = self.clear_script_args();
        let mut invocation = SCRIPT
            .get_or_init(|| redis::Script::new(CLEAR_SCRIPT))
            .prepare_invoke();
        invocation.key(registry).arg(head).arg(PINGS_KEY_SUFFIX);
        invocation
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StorageError> {
        Ok(self.client.get_multiplexed_tokio_connection().await?)
    }
}

#[async_trait::async_trait]
impl PingStore for RedisPingStore {
    async fn insert_ping(&self, device_id: &str, ts: i64) -> Result<bool, StorageError> {
        ensure_device_id(device_id)?;
        let mut connection = self.connection().await?;
        let mut pipe = redis::pipe();
        pipe.atomic()
            .sadd(self.registry_key(), device_id)
            .sadd(self.pings_key(device_id), ts);
        let (_, added): (i64, i64) = pipe.query_async(&mut connection).await?;
        Ok(added == 1)
    }

    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        let mut connection = self.connection().await?;
        let mut device_ids: Vec<String> = connection.smembers(self.registry_key()).await?;
        if device_ids.is_empty() {
            return Ok(Vec::new());
        }
        device_ids.sort();

        let mut pipe = redis::pipe();
        for device_id in &device_ids {
            pipe.smembers(self.pings_key(device_id));
        }
        let sets: Vec<Vec<i64>> = pipe.query_async(&mut connection).await?;

        let mut items = Vec::with_capacity(device_ids.len());
        for (device_id, pings) in device_ids.into_iter().zip(sets) {
            // 与 clear 并发时注册表可能残留 ID
            if pings.is_empty() {
                continue;
            }
            items.push(DeviceRecord::with_pings(device_id, pings));
        }
        Ok(items)
    }

    async fn find_device(&self, device_id: &str) -> Result<Option<DeviceRecord>, StorageError> {
        ensure_device_id(device_id)?;
        let mut connection = self.connection().await?;
        let pings: Vec<i64> = connection.smembers(self.pings_key(device_id)).await?;
        if pings.is_empty() {
            return Ok(None);
        }
        Ok(Some(DeviceRecord::with_pings(device_id, pings)))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut connection = self.connection().await?;
        let devices: i64 = self.clear_invocation().invoke_async(&mut connection).await?;
        tracing::debug!(devices, "redis ping keys cleared");
        Ok(())
    }
}
