use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/convert", post(handlers::convert_text))
        // Frontend bundle; ServeDir resolves "/" to index.html and 404s
        // on missing assets.
        .fallback_service(ServeDir::new(&state.config.static_dir))
}
