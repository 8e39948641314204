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

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    /// 缺省时使用内存存储（开发与演示模式）。
    pub database_url: Option<String>,
    pub cors_allow_origin: String,
    pub notifications_default_limit: i64,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("SDI_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let database_url = read_optional("SDI_DATABASE_URL");
        let cors_allow_origin =
            env::var("SDI_CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string());
        let notifications_default_limit =
            read_i64_with_default("SDI_NOTIFICATIONS_DEFAULT_LIMIT", 50)?;

        Ok(Self {
            http_addr,
            database_url,
            cors_allow_origin,
            notifications_default_limit,
        })
    }
}

fn read_i64_with_default(key: &str, default: i64) -> Result<i64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<i64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
