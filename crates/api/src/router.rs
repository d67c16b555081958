use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes;
use crate::state::AppState;

/// Build the application router with the tracing layer applied.
///
/// Used by both `main.rs` and the integration tests so tests exercise the
/// same stack production uses.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes(&state.config))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
