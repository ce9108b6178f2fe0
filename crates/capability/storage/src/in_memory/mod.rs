//! 内存存储实现模块
//!
//! 默认后端，也用于单元测试和集成测试。
//!
//! 包含以下实现：
//! - PingStore: InMemoryPingStore

pub mod ping;

pub use ping::*;
