// region:    --- Modules
pub mod accounts;
pub mod auction;
pub mod config;
pub mod database;
pub mod error;
pub mod network;
pub mod wiki;

// endregion: --- Modules

// region:    --- Imports
use crate::config::{AppKind, Config};
use crate::database::{DatabaseManager, AUCTIONS_SCHEMA, NETWORK_SCHEMA};
use crate::wiki::store::EntryStore;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

// endregion: --- Imports

/// 폼 본문 최대 크기 (1MB)
const BODY_LIMIT: usize = 1024 * 1024;

/// 서버 시작 단계 에러
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database initialisation failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정에 맞는 앱 라우터 생성
///
/// 데이터베이스 앱은 연결 후 스키마를 적용하고, 위키는 문서 디렉터리를 만든다.
pub async fn build_app(config: &Config) -> Result<Router, StartupError> {
    let router = match config.app {
        AppKind::Wiki => {
            let store = EntryStore::new(config.entries_dir.clone());
            store.init().await?;
            wiki::router(Arc::new(store))
        }
        AppKind::Auctions => {
            let db_manager = connect(config, AUCTIONS_SCHEMA).await?;
            auction::router(db_manager)
        }
        AppKind::Network => {
            let db_manager = connect(config, NETWORK_SCHEMA).await?;
            network::router(db_manager)
        }
    };
    info!("{:<12} --> {} 앱 라우터 준비", "Startup", config.app);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(router
        .layer(cors)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http()))
}

async fn connect(config: &Config, schema: &str) -> Result<Arc<DatabaseManager>, StartupError> {
    let db_manager = DatabaseManager::connect(&config.database_url, config.max_connections).await?;
    db_manager.initialize_database(schema).await?;
    info!("{:<12} --> 데이터베이스 초기화 성공", "Startup");
    Ok(Arc::new(db_manager))
}
