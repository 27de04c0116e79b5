//! Liveness/readiness probes.

use axum::Json;
use serde_json::{json, Value};

pub async fn alive() -> Json<Value> {
    Json(json!({"status": "alive"}))
}

pub async fn available() -> Json<Value> {
    Json(json!({"status": "available"}))
}
