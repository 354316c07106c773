//! API handlers

use axum::{body::Bytes, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::handler;
use crate::types::{GestureEvent, HandlerResponse};

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Invoke the handler with the raw request body as the event.
///
/// An empty or unparseable body is treated as `{}`.
pub async fn invoke(body: Bytes) -> Result<Json<HandlerResponse>, (StatusCode, Json<Value>)> {
    let request_id = Uuid::new_v4();

    let event = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        Err(e) => {
            if !body.is_empty() {
                tracing::debug!(%request_id, error = %e, "Body is not JSON; using empty event");
            }
            Value::Object(Map::new())
        }
    };
    let response = handler::handle_invocation(GestureEvent::from(event), &request_id.to_string())
        .map_err(|e| {
            tracing::error!(%request_id, error = %e, "Handler failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })?;

    Ok(Json(response))
}
