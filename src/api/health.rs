//! Health endpoints

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
    })
}

/// GET /live
pub async fn live_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        service: env!("CARGO_PKG_NAME"),
    })
}
