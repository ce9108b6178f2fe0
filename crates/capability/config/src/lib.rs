//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// ping 存储后端。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres { database_url: String, max_connections: u32 },
    Redis { redis_url: String, key_prefix: String },
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres { .. } => "postgres",
            Self::Redis { .. } => "redis",
        }
    }
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub store: StoreBackend,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("PING_HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let backend = read_optional("PING_STORE").unwrap_or_else(|| "memory".to_string());
        let store = match backend.to_ascii_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "postgres" => {
                let database_url = read_optional("PING_DATABASE_URL")
                    .ok_or_else(|| ConfigError::Missing("PING_DATABASE_URL".to_string()))?;
                let max_connections = read_u32_with_default("PING_DATABASE_MAX_CONNECTIONS", 8)?;
                if max_connections == 0 {
                    return Err(ConfigError::Invalid(
                        "PING_DATABASE_MAX_CONNECTIONS".to_string(),
                        "0".to_string(),
                    ));
                }
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            "redis" => StoreBackend::Redis {
                redis_url: env::var("PING_REDIS_URL")
                    .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
                key_prefix: env::var("PING_REDIS_KEY_PREFIX").unwrap_or_else(|_| "ping".to_string()),
            },
            _ => return Err(ConfigError::Invalid("PING_STORE".to_string(), backend)),
        };

        Ok(Self { http_addr, store })
    }
}

fn read_u32_with_default(key: &str, default: u32) -> Result<u32, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
