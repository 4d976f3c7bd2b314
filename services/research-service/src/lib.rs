//! Research Service
//!
//! Minimal REST service for OHLCV candle research queries.
//! Features:
//! - Close-price aggregation over submitted candle batches
//! - Liveness and metadata endpoints
//! - Configurable CORS for browser-based frontends

#![allow(missing_docs)]

use anyhow::Result;

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;

pub use config::{CorsConfig, ResearchConfig, ServerConfig};
pub use server::ResearchServer;

/// Start the research service server
pub async fn start_server(config: ResearchConfig) -> Result<()> {
    let server = ResearchServer::new(config);
    server.start().await
}
