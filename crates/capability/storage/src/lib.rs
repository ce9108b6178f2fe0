//! # Ping Storage 模块
//!
//! 本模块提供 ping 存储抽象层，支持多种存储后端实现。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：`PingStore` 异步 Trait
//! 2. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 3. **验证辅助层** (`validation.rs`)：设备 ID 校验
//! 4. **连接管理层** (`connection.rs`)：Postgres 连接池与建表
//! 5. **实现层**：
//!    - `in_memory/`：内存存储（默认后端，测试使用）
//!    - `postgres/`：PostgreSQL 存储
//!    - `redis`：Redis SET 存储
//!
//! ## 语义
//!
//! - 设备记录在第一次写入 ping 时隐式创建（upsert）
//! - 同一设备的 ping 按集合保存，重复写入是空操作
//! - `list_devices` 返回调用时刻的快照，不随后续写入变化
//! - `clear` 删除全部设备；与并发写入之间不保证先后
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use ping_storage::{InMemoryPingStore, PingStore};
//!
//! let store = InMemoryPingStore::new();
//! store.insert_ping("device-1", 1_622_505_600).await?;
//! let device = store.find_device("device-1").await?;
//! ```

// 模块导出：将子模块的内容导出到 crate 根目录
pub mod connection;
pub mod error;
pub mod in_memory;
pub mod postgres;
pub mod redis;
pub mod traits;
pub mod validation;

pub use connection::*;
pub use error::*;
pub use redis::RedisPingStore;
pub use traits::*;
pub use validation::*;

pub use in_memory::InMemoryPingStore;
pub use postgres::PgPingStore;
