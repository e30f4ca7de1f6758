//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::warn;

use super::state::AppState;
use super::types::Json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_topics: Option<usize>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Reports liveness plus the number of cached topics
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, cached_topics) = match state.cache.size().await {
        Ok(size) => (HealthStatus::Healthy, Some(size)),
        Err(e) => {
            warn!(error = %e, "Cache size unavailable");
            (HealthStatus::Degraded, None)
        }
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        cached_topics,
    };

    (StatusCode::OK, Json(response))
}
