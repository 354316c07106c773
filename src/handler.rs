//! Invocation handler
//!
//! The handler receives hand landmarks, does not inspect them, and answers
//! with a fixed acknowledgement. The downstream inference call is not wired
//! up yet, so every well-formed or malformed event gets the same reply.

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;

use crate::types::{GestureEvent, HandlerResponse};
use crate::{Error, Result};

/// Handle a raw JSON event.
pub fn handle(event: Value) -> Result<HandlerResponse> {
    handle_event(GestureEvent::from(event))
}

/// Handle an already-decoded event.
pub fn handle_event(_event: GestureEvent) -> Result<HandlerResponse> {
    HandlerResponse::acknowledged()
}

/// Record one invocation and handle it. Shared by the Lambda and HTTP surfaces.
pub fn handle_invocation(event: GestureEvent, request_id: &str) -> Result<HandlerResponse> {
    tracing::info!(
        request_id,
        landmarks = event.landmark_count(),
        "Processing gesture event"
    );

    handle_event(event)
}

/// Lambda runtime entry point
pub async fn function_handler(
    event: LambdaEvent<GestureEvent>,
) -> std::result::Result<HandlerResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    Ok(handle_invocation(payload, &context.request_id)?)
}

/// Serve invocations from the Lambda runtime API until it shuts down.
pub async fn run() -> Result<()> {
    lambda_runtime::run(service_fn(function_handler))
        .await
        .map_err(|e| Error::runtime(format!("lambda runtime exited: {}", e)))
}
