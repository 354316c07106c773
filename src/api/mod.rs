//! Local HTTP surface emulating the gateway

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::Result;

pub mod handlers;

/// Build the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/invoke", post(handlers::invoke))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind `server.host:server.port` and serve the router until shutdown.
pub async fn serve(server: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, create_router()).await?;

    Ok(())
}
