//! Research service server implementation

use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::{get, post},
};
use std::{net::SocketAddr, time::Instant};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    config::ResearchConfig,
    error::ApiError,
    handlers::{ComputeHandlers, HealthHandlers, MetaHandlers},
    middleware::{create_cors_layer, logging_middleware},
    models::{ComputeRequest, ComputeResponse, HealthResponse, MetaResponse},
};

/// Unified application state containing all handlers
#[derive(Clone)]
pub struct AppState {
    pub compute_handlers: ComputeHandlers,
    pub health_handlers: HealthHandlers,
    pub meta_handlers: MetaHandlers,
}

/// Research service server
pub struct ResearchServer {
    config: ResearchConfig,
    version: String,
    start_time: Instant,
}

impl ResearchServer {
    /// Create a new server, reading `SERVICE_VERSION` from the environment
    #[must_use]
    pub fn new(config: ResearchConfig) -> Self {
        Self::with_version(config, crate::config::service_version())
    }

    /// Create a new server with an explicit version string
    #[must_use]
    pub fn with_version(config: ResearchConfig, version: String) -> Self {
        Self {
            config,
            version,
            start_time: Instant::now(),
        }
    }

    /// Start the server with graceful shutdown on ctrl-c
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .server_address()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address: {e}"))?;

        let app = self.router();

        info!("Starting research service on {}", addr);

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind TCP listener to {}: {}", addr, e);
                return Err(anyhow::anyhow!("Failed to bind to address {addr}: {e}"));
            }
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {e}"))?;

        Ok(())
    }

    /// Build the Axum application with all routes and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        let app_state = AppState {
            compute_handlers: ComputeHandlers::new(),
            health_handlers: HealthHandlers::new(),
            meta_handlers: MetaHandlers::new(self.version.clone(), self.start_time),
        };

        let mut app = Router::new()
            .route("/compute", post(compute))
            .route("/health", get(health_check))
            .route("/meta", get(meta))
            .with_state(app_state)
            .layer(DefaultBodyLimit::max(self.config.server.max_body_size))
            .layer(TimeoutLayer::new(std::time::Duration::from_secs(
                self.config.server.timeout_seconds,
            )))
            .layer(axum::middleware::from_fn(logging_middleware))
            .layer(TraceLayer::new_for_http());

        if self.config.cors.enabled {
            app = app.layer(create_cors_layer(&self.config));
        }

        app
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping");
}

// Handler wrapper functions to work with unified state
async fn compute(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>, ApiError> {
    ComputeHandlers::compute(State(state.compute_handlers), Json(request)).await
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    HealthHandlers::health_check(State(state.health_handlers)).await
}

async fn meta(State(state): State<AppState>) -> Json<MetaResponse> {
    MetaHandlers::meta(State(state.meta_handlers)).await
}

/// API route documentation
pub fn print_routes() {
    println!("Research Service Routes:");
    println!("========================");
    println!();
    println!("  POST /compute  - Aggregate a candle batch (count, last close, average close)");
    println!("  GET  /health   - Health check");
    println!("  GET  /meta     - Service metadata and uptime");
    println!();
    println!("All endpoints support:");
    println!("- JSON request/response bodies");
    println!("- CORS (configurable origins, credentials)");
    println!("- Request tracing");
}
