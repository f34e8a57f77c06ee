//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the two AI endpoints and a health check under `/api`, and serves
//! the built client bundle as static files for everything else. The client
//! ships as CSR/hydrate assets; there is no server-side rendering.

pub mod ai;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Resolve the directory holding the built client assets.
fn client_dist_dir() -> PathBuf {
    std::env::var("CLIENT_DIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application router: API routes + static client assets.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let client_service = ServeDir::new(client_dist_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/price-suggestion", post(ai::suggest_price))
        .route("/api/chat", post(ai::chat_answer))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
        .fallback_service(client_service)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
