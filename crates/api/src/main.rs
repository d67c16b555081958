use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pingpong_api::config::ServerConfig;
use pingpong_api::router::build_router;
use pingpong_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pingpong_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Failed to load server configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        versioned = config.is_versioned(),
        "Loaded server configuration"
    );

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // Serves until the process is terminated externally.
    axum::serve(listener, app).await.expect("Server error");
}
