//! 传感器随机游走模拟。
//!
//! 对车队内每个垃圾桶生成一步传感器读数：填充率缓慢上升、电量
//! 缓慢下降、小概率掉线，温湿度做小幅漂移。状态字段经过
//! [`BinStateManager::apply_update`] 走完整的阈值规则，环境量直写。
//!
//! 随机源抽象为 [`NoiseSource`]，生产环境使用 [`ThreadRngNoise`]，
//! 测试注入确定性序列。

use domain::{BinStatus, FULL_FILL_THRESHOLD, clamp, now_epoch_ms};
use rand::Rng;
use sdi_storage::{DustbinRecord, DustbinUpdate};

use crate::manager::{BinStateManager, FleetError};

/// 掉线概率。
const OFFLINE_PROBABILITY: f64 = 0.02;

/// 均匀分布随机源。
pub trait NoiseSource: Send {
    /// 返回 `[low, high]` 区间内的一个样本。
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// 基于线程本地 RNG 的生产随机源。
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngNoise;

impl ThreadRngNoise {
    pub fn new() -> Self {
        Self
    }
}

impl NoiseSource for ThreadRngNoise {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// 单步模拟产出的传感器读数。
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub fill_level: f64,
    pub battery_level: f64,
    pub status: BinStatus,
    pub is_full: bool,
    pub temperature: f64,
    pub humidity: f64,
}

/// 基于当前状态生成下一步读数。
///
/// - 填充率漂移 U(-2, 5)，截断到 [0, 100]；
/// - 电量漂移 U(-0.5, 0.1)，截断到 [0, 100]；
/// - 以 [`OFFLINE_PROBABILITY`] 概率掉线，否则在线；
/// - 温度漂移 U(-2, 2) 截断到 [-10, 50]，湿度漂移 U(-5, 5) 截断到 [0, 100]。
pub fn next_reading(current: &DustbinRecord, noise: &mut dyn NoiseSource) -> SensorReading {
    let fill_level = clamp(0.0, 100.0, current.fill_level + noise.uniform(-2.0, 5.0));
    let battery_level = clamp(0.0, 100.0, current.battery_level + noise.uniform(-0.5, 0.1));
    let status = if noise.uniform(0.0, 1.0) < OFFLINE_PROBABILITY {
        BinStatus::Offline
    } else {
        BinStatus::Online
    };
    let temperature = clamp(-10.0, 50.0, current.temperature + noise.uniform(-2.0, 2.0));
    let humidity = clamp(0.0, 100.0, current.humidity + noise.uniform(-5.0, 5.0));

    SensorReading {
        fill_level,
        battery_level,
        status,
        is_full: fill_level >= FULL_FILL_THRESHOLD,
        temperature,
        humidity,
    }
}

/// 一轮模拟的汇总。
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub updated_bins: u64,
    pub ts_ms: i64,
}

/// 车队模拟驱动。
#[derive(Clone)]
pub struct FleetSimulator {
    manager: BinStateManager,
}

impl FleetSimulator {
    pub fn new(manager: BinStateManager) -> Self {
        Self { manager }
    }

    /// 对车队内全部垃圾桶各推进一步。
    ///
    /// 桶在遍历期间被并发删除时跳过该桶，不计入更新数。
    pub async fn simulate_all(
        &self,
        bins: &[DustbinRecord],
        noise: &mut dyn NoiseSource,
    ) -> Result<SimulationReport, FleetError> {
        let mut updated_bins = 0;
        for bin in bins {
            let reading = next_reading(bin, noise);
            let update = DustbinUpdate {
                fill_level: Some(reading.fill_level),
                battery_level: Some(reading.battery_level),
                status: Some(reading.status),
                is_full: Some(reading.is_full),
                ..Default::default()
            };
            match self.manager.apply_update(&bin.dustbin_id, update).await {
                Ok(_) => {}
                Err(FleetError::NotFound) => continue,
                Err(err) => return Err(err),
            }
            match self
                .manager
                .apply_environment(&bin.dustbin_id, reading.temperature, reading.humidity)
                .await
            {
                Ok(()) => {}
                Err(FleetError::NotFound) => continue,
                Err(err) => return Err(err),
            }
            updated_bins += 1;
        }

        sdi_telemetry::record_simulation_run(updated_bins);
        Ok(SimulationReport {
            updated_bins,
            ts_ms: now_epoch_ms(),
        })
    }
}
