//! Liveness endpoint for the hosting platform's health check

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use name_styler_core::config::schema::ServerConfig;

pub fn app() -> Router {
    Router::new()
        .route("/", get(home))
        .layer(TraceLayer::new_for_http())
}

async fn home() -> &'static str {
    "Name Styler Bot is running!"
}

pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Liveness endpoint listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}
