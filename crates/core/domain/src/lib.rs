//! 领域模型：所有模块共享的枚举、阈值与数值辅助。

/// 满桶阈值（百分比）：填充度达到该值即视为满桶，触发告警。
pub const FULL_FILL_THRESHOLD: f64 = 90.0;

/// 低电量阈值（百分比）：电量不高于该值触发告警。
pub const LOW_BATTERY_THRESHOLD: f64 = 20.0;

/// 垃圾桶状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinStatus {
    Online,
    Offline,
    Maintenance,
}

impl BinStatus {
    /// 状态的存储/传输表示。
    pub fn as_str(&self) -> &'static str {
        match self {
            BinStatus::Online => "online",
            BinStatus::Offline => "offline",
            BinStatus::Maintenance => "maintenance",
        }
    }

    /// 解析存储/传输表示；未知值返回 None。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(BinStatus::Online),
            "offline" => Some(BinStatus::Offline),
            "maintenance" => Some(BinStatus::Maintenance),
            _ => None,
        }
    }
}

/// 通知类型。
///
/// 阈值派生逻辑只产生 `Full` 与 `BatteryLow`；
/// `Offline`/`Maintenance` 保留给直接创建通知的调用方。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Full,
    BatteryLow,
    Offline,
    Maintenance,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Full => "full",
            NotificationKind::BatteryLow => "battery_low",
            NotificationKind::Offline => "offline",
            NotificationKind::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(NotificationKind::Full),
            "battery_low" => Some(NotificationKind::BatteryLow),
            "offline" => Some(NotificationKind::Offline),
            "maintenance" => Some(NotificationKind::Maintenance),
            _ => None,
        }
    }
}

/// 通知优先级。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl NotificationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationPriority::Low => "low",
            NotificationPriority::Medium => "medium",
            NotificationPriority::High => "high",
            NotificationPriority::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(NotificationPriority::Low),
            "medium" => Some(NotificationPriority::Medium),
            "high" => Some(NotificationPriority::High),
            "critical" => Some(NotificationPriority::Critical),
            _ => None,
        }
    }
}

/// 将数值截断到 [low, high] 区间。
pub fn clamp(low: f64, high: f64, value: f64) -> f64 {
    value.max(low).min(high)
}

/// 四舍五入到 1 位小数（看板均值展示口径）。
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 当前 Unix 时间（毫秒）。
pub fn now_epoch_ms() -> i64 {
    let now = std::time::SystemTime::now();
    let duration = now
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_millis() as i64
}
