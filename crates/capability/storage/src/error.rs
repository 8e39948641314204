//! 存储层错误类型
//!
//! 两个集合（dustbins/notifications）的全部后端共用同一个不透明
//! 错误：Postgres 后端封装 sqlx 执行/连接错误，内存后端封装锁
//! 中毒与重复主键（"dustbin exists" 等）。上层只依赖 `Display`
//! 文本，映射为统一的 INTERNAL.ERROR 响应，不区分具体后端。

#[derive(Debug)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}
