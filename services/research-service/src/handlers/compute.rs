//! Candle aggregation handler

use axum::extract::State;
use axum::response::Json;
use tracing::info;

use crate::aggregate::aggregate_closes;
use crate::error::ApiError;
use crate::models::{ComputeRequest, ComputeResponse};

/// Handlers for `/compute`
#[derive(Debug, Clone)]
pub struct ComputeHandlers;

impl ComputeHandlers {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Aggregate the submitted candle batch
    pub async fn compute(
        State(_handlers): State<Self>,
        Json(request): Json<ComputeRequest>,
    ) -> Result<Json<ComputeResponse>, ApiError> {
        info!(candles = request.candles.len(), "Compute request");

        let response = aggregate_closes(&request.candles)?;
        Ok(Json(response))
    }
}

impl Default for ComputeHandlers {
    fn default() -> Self {
        Self::new()
    }
}
