//! Handlers 模块

pub mod dashboard;
pub mod demo;
pub mod dustbins;
pub mod metrics;
pub mod notifications;
pub mod root;
pub mod simulate;

pub use dashboard::*;
pub use demo::*;
pub use dustbins::*;
pub use metrics::*;
pub use notifications::*;
pub use root::*;
pub use simulate::*;
