//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener and shut down gracefully

use axum::{routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::http::handlers::{get_config, get_credits, get_health};
use crate::service::ConfigHandler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config_handler: Arc<ConfigHandler>,
}

/// HTTP API server for the credits gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the given config handler.
    pub fn new(config_handler: Arc<ConfigHandler>, request_timeout: Duration) -> Self {
        let state = AppState { config_handler };
        Self {
            router: Self::build_router(state, request_timeout),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
        Router::new()
            .route("/health", get(get_health))
            .route("/config", get(get_config))
            .route("/credits/{id}", get(get_credits))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` completes.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
