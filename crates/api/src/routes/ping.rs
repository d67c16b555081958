use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use pingpong_core::ResponsePayload;

use crate::error::AppResult;
use crate::state::AppState;

/// ANY /api/ping -- responds with a static "pong" payload.
pub async fn ping(State(state): State<AppState>) -> AppResult<Response> {
    tracing::info!("ping received");
    respond(StatusCode::OK, "pong", &state)
}

/// ANY /api/pong -- responds with a static "ping" payload.
///
/// Only mounted in the versioned variant (see `routes::api_routes`).
pub async fn pong(State(state): State<AppState>) -> AppResult<Response> {
    tracing::info!("pong received");
    respond(StatusCode::OK, "ping", &state)
}

/// Encode a payload whose `code` field mirrors `status` and write both
/// from the same value. Encode failure propagates as a 500 instead of
/// an empty 200 body.
fn respond(status: StatusCode, message: &str, state: &AppState) -> AppResult<Response> {
    let payload = ResponsePayload::new(message, status.as_u16(), state.config.api_version.clone());
    let body = serde_json::to_string(&payload)?;

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
