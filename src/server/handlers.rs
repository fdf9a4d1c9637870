// Liveness handlers

use axum::Json;
use serde_json::{json, Value};

/// `GET /` on the inner application.
pub async fn health_handler() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

/// `GET /api/health` on the outer adapter, answered by the adapter itself
/// and never delegated to the inner application.
pub async fn adapter_health_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
