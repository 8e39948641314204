//! 内存存储实现
//!
//! 仅用于本地演示和测试：未配置数据库 URL 时，API 进程以内存存储启动。

pub mod dustbin;
pub mod notification;

pub use dustbin::InMemoryDustbinStore;
pub use notification::InMemoryNotificationStore;
