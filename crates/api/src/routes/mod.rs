pub mod ping;

use axum::routing::any;
use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// `/ping` is always present; `/pong` only exists in the versioned
/// variant. Both accept any HTTP method.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let router = Router::new().route("/ping", any(ping::ping));

    if config.is_versioned() {
        router.route("/pong", any(ping::pong))
    } else {
        router
    }
}
