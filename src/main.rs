use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use biztone_backend::config::Config;
use biztone_backend::routes;
use biztone_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biztone_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    info!("Serving frontend bundle from {}", config.static_dir);

    let app_state = AppState::new(config.clone());
    if app_state.groq.is_none() {
        warn!("GROQ_API_KEY not set - /api/convert will reject all requests");
    }

    let app = Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
