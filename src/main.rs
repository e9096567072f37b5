// region:    --- Imports
use tokio::net::TcpListener;
use tracing::{error, info};
use webapps::build_app;
use webapps::config::Config;

// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Config::load()?;

    // 앱 선택 및 초기화
    let app = match build_app(&config).await {
        Ok(app) => app,
        Err(e) => {
            error!("{:<12} --> {} 앱 초기화 실패: {:?}", "Main", config.app, e);
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(
        "{:<12} --> Web Server ({}): Listening on {}",
        "Main",
        config.app,
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
