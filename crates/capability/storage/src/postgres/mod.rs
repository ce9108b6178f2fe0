//! # PostgreSQL 存储实现模块
//!
//! ## 数据库模式
//!
//! - `device_pings`：(device_id text, ts bigint)，复合主键 `(device_id, ts)`
//!
//! 表由 [`crate::connection::ensure_schema`] 在启动时创建。设备记录不单独建表：
//! 一个设备至少有一条 ping 才存在。
//!
//! ## 并发
//!
//! 写入使用 `on conflict do nothing`，同一设备的并发写入由主键约束串行化，
//! 不会出现重复行，也不会丢失更新。
//!
//! ## 错误处理
//!
//! `sqlx::Error` 自动转换为 `StorageError`，不做重试。

pub mod ping;

pub use ping::*;
