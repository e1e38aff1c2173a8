use axum::{Router, routing::get};

use crate::application::http::server::app_state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
