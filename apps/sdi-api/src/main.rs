//! Smart Dustbin IoT HTTP API 入口。
//!
//! 装配流程：加载配置 → 初始化日志 → 选择存储后端（Postgres 或
//! 内存）→ 组装状态管理器/聚合器/模拟器 → 挂载路由（裸路径与
//! /api 前缀各一份）→ 注入 request_id/trace_id → 启动服务。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
};
use sdi_config::AppConfig;
use sdi_fleet::{BinStateManager, FleetAggregator, FleetSimulator};
use sdi_storage::{
    DustbinStore, InMemoryDustbinStore, InMemoryNotificationStore, NotificationStore,
    PgDustbinStore, PgNotificationStore, connect_pool,
};
use sdi_telemetry::{init_tracing, new_request_ids};
use tower_http::cors::{Any, CorsLayer};
use tracing::Instrument;

mod handlers;
mod routes;
mod utils;

#[derive(Clone)]
pub struct AppState {
    pub dustbin_store: Arc<dyn DustbinStore>,
    pub notification_store: Arc<dyn NotificationStore>,
    pub manager: BinStateManager,
    pub aggregator: FleetAggregator,
    pub simulator: FleetSimulator,
    pub notifications_default_limit: i64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 未配置数据库时退化为内存存储（开发与演示模式）
    let (dustbin_store, notification_store): (Arc<dyn DustbinStore>, Arc<dyn NotificationStore>) =
        match &config.database_url {
            Some(database_url) => {
                let pool = connect_pool(database_url).await?;
                (
                    Arc::new(PgDustbinStore::new(pool.clone())),
                    Arc::new(PgNotificationStore::new(pool)),
                )
            }
            None => {
                tracing::warn!("SDI_DATABASE_URL not set, using in-memory storage");
                (
                    Arc::new(InMemoryDustbinStore::new()),
                    Arc::new(InMemoryNotificationStore::new()),
                )
            }
        };

    let manager = BinStateManager::new(dustbin_store.clone(), notification_store.clone());
    let aggregator = FleetAggregator::new(dustbin_store.clone(), notification_store.clone());
    let simulator = FleetSimulator::new(manager.clone());
    let state = AppState {
        dustbin_store,
        notification_store,
        manager,
        aggregator,
        simulator,
        notifications_default_limit: config.notifications_default_limit,
    };

    let cors = if config.cors_allow_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(config.cors_allow_origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // 同一套路由挂载两份：裸路径与 /api 前缀
    let app = Router::new()
        .merge(routes::create_api_router())
        .nest("/api", routes::create_api_router())
        .with_state(state)
        .layer(middleware::from_fn(request_context))
        .layer(cors);

    tracing::info!(addr = %config.http_addr, "Smart Dustbin IoT API started");
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    // 生成 request_id 与 trace_id，并注入请求扩展与日志
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}
