use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

use crate::api::response::ApiResponse;

/// GET /health - liveness probe, no store access
pub async fn health() -> (StatusCode, Json<ApiResponse<Value>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::success(json!({ "status": "ok" }))),
    )
}
