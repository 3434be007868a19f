//! struk-lambda
//!
//! HTTP surface of the receipt renderer, served through `lambda_http`.

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Lambda's synchronous invocation payload ceiling.
const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", post(routes::receipts::generate_pdf))
        .route("/generate-pdf", post(routes::receipts::generate_pdf))
        .route("/preview", post(routes::receipts::preview))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
