//! Health check controller

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use serde_json::json;

use crate::presentation::controllers::AppState;
use crate::presentation::models::HealthResponse;

/// Basic health check with build information
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        details: Some(json!({
            "build_info": {
                "version": env!("CARGO_PKG_VERSION"),
                "build_date": option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"),
                "git_sha": option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
                "rustc": option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
            }
        })),
    })
}

/// Kubernetes liveness probe endpoint
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn liveness_probe() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe; ready once the developer store can be read
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready to accept traffic"),
        (status = 503, description = "Developer store is unavailable")
    )
)]
pub async fn readiness_probe(State(app_state): State<AppState>) -> StatusCode {
    match app_state.developer_service.list_developers().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
