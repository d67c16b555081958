use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Read-only after startup, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (variant toggle, bind address).
    pub config: Arc<ServerConfig>,
}
