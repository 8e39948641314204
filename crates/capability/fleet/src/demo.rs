//! 演示数据初始化。
//!
//! 清空两个集合后播种固定城市点位的垃圾桶，初始传感器值随机生成。

use domain::{BinStatus, FULL_FILL_THRESHOLD, now_epoch_ms};
use sdi_storage::{DustbinRecord, DustbinStore, NotificationStore};
use uuid::Uuid;

use crate::manager::FleetError;
use crate::simulate::NoiseSource;

struct DemoLocation {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    address: &'static str,
}

const DEMO_LOCATIONS: [DemoLocation; 12] = [
    DemoLocation {
        name: "Central Park East",
        latitude: 40.7829,
        longitude: -73.9654,
        address: "Central Park East, New York, NY",
    },
    DemoLocation {
        name: "Times Square",
        latitude: 40.7580,
        longitude: -73.9855,
        address: "Times Square, New York, NY",
    },
    DemoLocation {
        name: "Brooklyn Bridge",
        latitude: 40.7061,
        longitude: -73.9969,
        address: "Brooklyn Bridge, New York, NY",
    },
    DemoLocation {
        name: "Golden Gate Park",
        latitude: 37.7694,
        longitude: -122.4862,
        address: "Golden Gate Park, San Francisco, CA",
    },
    DemoLocation {
        name: "Fisherman's Wharf",
        latitude: 37.8080,
        longitude: -122.4177,
        address: "Fisherman's Wharf, San Francisco, CA",
    },
    DemoLocation {
        name: "Union Square",
        latitude: 37.7879,
        longitude: -122.4075,
        address: "Union Square, San Francisco, CA",
    },
    DemoLocation {
        name: "Santa Monica Pier",
        latitude: 34.0195,
        longitude: -118.4912,
        address: "Santa Monica Pier, Los Angeles, CA",
    },
    DemoLocation {
        name: "Hollywood Boulevard",
        latitude: 34.1022,
        longitude: -118.3390,
        address: "Hollywood Boulevard, Los Angeles, CA",
    },
    DemoLocation {
        name: "Venice Beach",
        latitude: 33.9850,
        longitude: -118.4695,
        address: "Venice Beach, Los Angeles, CA",
    },
    DemoLocation {
        name: "Navy Pier",
        latitude: 41.8917,
        longitude: -87.6086,
        address: "Navy Pier, Chicago, IL",
    },
    DemoLocation {
        name: "Millennium Park",
        latitude: 41.8826,
        longitude: -87.6226,
        address: "Millennium Park, Chicago, IL",
    },
    DemoLocation {
        name: "Lincoln Park",
        latitude: 41.9742,
        longitude: -87.6661,
        address: "Lincoln Park, Chicago, IL",
    },
];

/// 清空现有数据并播种演示车队，返回创建的垃圾桶数量。
///
/// 初始值分布：填充率 U(10, 95)、电量 U(30, 100)、温度 U(15, 35)、
/// 湿度 U(30, 70)，75% 概率在线，`is_full` 按填充率阈值派生。
pub async fn seed_demo_data(
    dustbins: &dyn DustbinStore,
    notifications: &dyn NotificationStore,
    noise: &mut dyn NoiseSource,
) -> Result<u64, FleetError> {
    dustbins.delete_all_dustbins().await?;
    notifications.delete_all_notifications().await?;

    for (index, location) in DEMO_LOCATIONS.iter().enumerate() {
        let fill_level = noise.uniform(10.0, 95.0);
        let record = DustbinRecord {
            dustbin_id: Uuid::new_v4().to_string(),
            name: format!("SmartBin-{:03} ({})", index + 1, location.name),
            latitude: location.latitude,
            longitude: location.longitude,
            address: location.address.to_string(),
            fill_level,
            battery_level: noise.uniform(30.0, 100.0),
            status: if noise.uniform(0.0, 1.0) < 0.75 {
                BinStatus::Online
            } else {
                BinStatus::Offline
            },
            is_full: fill_level >= FULL_FILL_THRESHOLD,
            temperature: noise.uniform(15.0, 35.0),
            humidity: noise.uniform(30.0, 70.0),
            last_updated_ms: now_epoch_ms(),
        };
        dustbins.create_dustbin(record).await?;
    }

    Ok(DEMO_LOCATIONS.len() as u64)
}
