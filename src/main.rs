use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use wachitraductor::{AppConfig, AppState, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    // Both datasets are read once here and shared read-only afterwards
    let state = AppState::load(&config);

    let app = routes::app_router(state)
        .layer(CatchPanicLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config
        .socket_addr()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    log::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
