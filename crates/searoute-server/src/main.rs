//! Searoute server - HTTP backend for maritime route planning.

use anyhow::Result;
use axum::routing::get;
use searoute_server::api;
use searoute_server::config::Config;
use searoute_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("searoute_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting searoute server...");

    let config = Config::from_env();
    let port = config.server_port;
    let state = Arc::new(AppState::new(&config));

    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
