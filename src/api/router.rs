use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, normalize_accept_middleware};
use super::rpc;
use super::state::AppState;

/// Create the router serving `/rpc` and `/health`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/rpc", post(rpc::handle_rpc))
        .with_state(state)
        .layer(middleware::from_fn(normalize_accept_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
