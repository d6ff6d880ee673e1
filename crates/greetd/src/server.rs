//! HTTP server for greetd

use crate::config::{GreetdConfig, GreetingConfig};
use crate::routes;
use anyhow::{Context, Result};
use axum::http::Method;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
pub struct AppState {
    pub greeting: GreetingConfig,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(greeting: GreetingConfig) -> Self {
        Self {
            greeting,
            start_time: Instant::now(),
        }
    }
}

/// Build the router with all routes and layers
pub fn router(state: AppState) -> Router {
    // The form may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .merge(routes::greeting_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve on an already bound listener until the process is interrupted
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Bind the configured address and serve
pub async fn run(config: GreetdConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", listener.local_addr()?);
    serve(listener, AppState::new(config.greeting)).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down gracefully"),
        Err(e) => {
            warn!("Cannot listen for Ctrl+C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
