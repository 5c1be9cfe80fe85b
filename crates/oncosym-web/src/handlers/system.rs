//! Liveness and health checks.

use axum::Json;
use serde_json::{json, Value};

/// GET /: confirms the service is up.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Cancer prediction ML service running",
        "version": env!("CARGO_PKG_VERSION"),
        "example_endpoint": "/predict",
    }))
}

/// GET /health: liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
