//! Liveness probe handler

use axum::extract::State;
use axum::response::Json;

use crate::models::HealthResponse;

/// Handlers for `/health`
#[derive(Debug, Clone)]
pub struct HealthHandlers;

impl HealthHandlers {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Health check endpoint; answers while the process is serving
    pub async fn health_check(State(_handlers): State<Self>) -> Json<HealthResponse> {
        Json(HealthResponse::ok())
    }
}

impl Default for HealthHandlers {
    fn default() -> Self {
        Self::new()
    }
}
