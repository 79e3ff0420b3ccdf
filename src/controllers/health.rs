use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready() -> impl IntoResponse {
    // Storage is in-process, so readiness only reflects the running server
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "storage": "ok"
        })),
    )
}
