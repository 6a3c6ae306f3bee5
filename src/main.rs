use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use dotenvy::dotenv;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// 声明子模块
mod config;
mod error;
mod models;
mod handlers;
mod services;

use config::Config;

// 定义全局状态，方便在 Handler 中获取 Excel 文件路径
pub struct AppState {
    pub excel_path: PathBuf,
    // 追加是"读全量-拼接-重写全量"，必须串行化，否则并发提交会互相覆盖
    pub write_lock: Mutex<()>,
}

#[tokio::main]
async fn main() {
    // 1. 加载 .env 环境变量
    dotenv().ok();
    let config = Config::load();

    // 2. 初始化日志系统
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let shared_state = Arc::new(AppState {
        excel_path: config.excel_path.clone(),
        write_lock: Mutex::new(()),
    });

    // 3. 配置跨域 (CORS) - 开发阶段允许所有，生产环境需收紧为前端域名
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 4. 构建路由
    let app = Router::new()
        // 表单提交：追加一行到 Excel
        .route("/submit", post(handlers::submit_handler::submit_data))
        // 下载当前 Excel 文件
        .route("/download", get(handlers::download_handler::download_excel))
        // 中间件：日志记录和跨域
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state);

    // 5. 启动服务
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        "🚀 Server started at http://{}, excel_path={}",
        addr,
        config.excel_path.display()
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
