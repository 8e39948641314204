use std::sync::Arc;

use domain::BinStatus;
use sdi_fleet::{BinStateManager, FleetSimulator, NoiseSource, seed_demo_data, simulate};
use sdi_storage::{
    DustbinRecord, DustbinStore, InMemoryDustbinStore, InMemoryNotificationStore,
    NotificationStore,
};

/// 按脚本回放的确定性随机源。
///
/// 每次 `uniform` 调用弹出一个 [0, 1] 系数，映射到请求区间；
/// 脚本耗尽后返回区间中点。
struct ScriptedNoise {
    script: Vec<f64>,
    cursor: usize,
}

impl ScriptedNoise {
    fn new(script: Vec<f64>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl NoiseSource for ScriptedNoise {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let factor = match self.script.get(self.cursor) {
            Some(value) => *value,
            None => 0.5,
        };
        self.cursor += 1;
        low + (high - low) * factor
    }
}

fn dustbin(dustbin_id: &str, fill: f64, battery: f64) -> DustbinRecord {
    DustbinRecord {
        dustbin_id: dustbin_id.to_string(),
        name: format!("SmartBin-{dustbin_id}"),
        latitude: 0.0,
        longitude: 0.0,
        address: "nowhere".to_string(),
        fill_level: fill,
        battery_level: battery,
        status: BinStatus::Online,
        is_full: fill >= 90.0,
        temperature: 20.0,
        humidity: 50.0,
        last_updated_ms: 1,
    }
}

fn setup() -> (
    Arc<InMemoryDustbinStore>,
    Arc<InMemoryNotificationStore>,
    FleetSimulator,
) {
    let dustbins = Arc::new(InMemoryDustbinStore::new());
    let notifications = Arc::new(InMemoryNotificationStore::new());
    let manager = BinStateManager::new(dustbins.clone(), notifications.clone());
    (dustbins, notifications, FleetSimulator::new(manager))
}

#[test]
fn next_reading_clamps_to_sensor_bounds() {
    // 全 1.0 系数取各区间上界：fill +5、battery +0.1、掉线判定 1.0（在线）
    let mut noise = ScriptedNoise::new(vec![1.0; 5]);
    let current = dustbin("a", 98.0, 100.0);
    let reading = simulate::next_reading(&current, &mut noise);
    assert_eq!(reading.fill_level, 100.0);
    assert_eq!(reading.battery_level, 100.0);
    assert_eq!(reading.status, BinStatus::Online);
    assert!(reading.is_full);
    assert_eq!(reading.temperature, 22.0);
    assert_eq!(reading.humidity, 55.0);

    // 全 0.0 系数取各区间下界：fill -2、battery -0.5、掉线判定 0.0（掉线）
    let mut noise = ScriptedNoise::new(vec![0.0; 5]);
    let current = dustbin("b", 1.0, 0.2);
    let reading = simulate::next_reading(&current, &mut noise);
    assert_eq!(reading.fill_level, 0.0);
    assert_eq!(reading.battery_level, 0.0);
    assert_eq!(reading.status, BinStatus::Offline);
    assert!(!reading.is_full);
}

#[tokio::test]
async fn simulate_all_updates_every_bin() {
    let (dustbins, notifications, simulator) = setup();
    dustbins
        .create_dustbin(dustbin("a", 88.0, 80.0))
        .await
        .expect("create");
    dustbins
        .create_dustbin(dustbin("b", 10.0, 50.0))
        .await
        .expect("create");

    let bins = dustbins.list_dustbins().await.expect("list");
    // 每桶 5 次采样，两桶同脚本（列表顺序无关）：
    // 填充 +5（a 达到 93 触发满桶通知，b 保持安静）、电量 +0.1、在线
    let mut noise = ScriptedNoise::new(vec![
        1.0, 1.0, 1.0, 0.5, 0.5, //
        1.0, 1.0, 1.0, 0.5, 0.5,
    ]);
    let report = simulator
        .simulate_all(&bins, &mut noise)
        .await
        .expect("simulate");
    assert_eq!(report.updated_bins, 2);
    assert!(report.ts_ms > 0);

    let a = dustbins
        .find_dustbin("a")
        .await
        .expect("query")
        .expect("dustbin");
    assert_eq!(a.fill_level, 93.0);
    assert!(a.is_full);
    assert_eq!(notifications.count_unread().await.expect("count"), 1);
}

#[tokio::test]
async fn simulate_clears_full_flag_when_fill_recedes() {
    let (dustbins, _notifications, simulator) = setup();
    let mut bin = dustbin("a", 91.0, 80.0);
    bin.is_full = true;
    dustbins.create_dustbin(bin).await.expect("create");

    let bins = dustbins.list_dustbins().await.expect("list");
    // 填充率回落到 89（91 - 2），模拟路径显式下发派生后的 is_full
    let mut noise = ScriptedNoise::new(vec![0.0, 1.0, 1.0, 0.5, 0.5]);
    simulator
        .simulate_all(&bins, &mut noise)
        .await
        .expect("simulate");

    let a = dustbins
        .find_dustbin("a")
        .await
        .expect("query")
        .expect("dustbin");
    assert_eq!(a.fill_level, 89.0);
    assert!(!a.is_full);
}

#[tokio::test]
async fn simulate_skips_concurrently_deleted_bins() {
    let (dustbins, _notifications, simulator) = setup();
    dustbins
        .create_dustbin(dustbin("a", 10.0, 80.0))
        .await
        .expect("create");
    let bins = dustbins.list_dustbins().await.expect("list");
    dustbins.delete_dustbin("a").await.expect("delete");

    let mut noise = ScriptedNoise::new(Vec::new());
    let report = simulator
        .simulate_all(&bins, &mut noise)
        .await
        .expect("simulate");
    assert_eq!(report.updated_bins, 0);
}

#[tokio::test]
async fn demo_seed_replaces_fleet() {
    let dustbins = Arc::new(InMemoryDustbinStore::new());
    let notifications = Arc::new(InMemoryNotificationStore::new());
    dustbins
        .create_dustbin(dustbin("old", 50.0, 50.0))
        .await
        .expect("create");

    let mut noise = ScriptedNoise::new(Vec::new());
    let seeded = seed_demo_data(dustbins.as_ref(), notifications.as_ref(), &mut noise)
        .await
        .expect("seed");
    assert_eq!(seeded, 12);
    assert_eq!(dustbins.count_dustbins().await.expect("count"), 12);
    assert!(dustbins.find_dustbin("old").await.expect("query").is_none());

    let bins = dustbins.list_dustbins().await.expect("list");
    // 中点系数下：填充率 52.5、电量 65、在线判定 0.5 < 0.75（在线）
    let first = bins
        .iter()
        .find(|bin| bin.name.starts_with("SmartBin-001"))
        .expect("seeded bin");
    assert_eq!(first.name, "SmartBin-001 (Central Park East)");
    assert_eq!(first.fill_level, 52.5);
    assert_eq!(first.battery_level, 65.0);
    assert_eq!(first.status, BinStatus::Online);
    assert!(!first.is_full);
}
