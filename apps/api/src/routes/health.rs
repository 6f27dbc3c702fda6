use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Returns service metadata.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "HR Helper API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs"
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
