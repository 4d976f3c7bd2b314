//! Service metadata handler

use std::time::Instant;

use axum::extract::State;
use axum::response::Json;

use crate::config::SERVICE_NAME;
use crate::models::MetaResponse;

/// Handlers for `/meta`.
///
/// Captures the version string and process start instant once at
/// construction; both are immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct MetaHandlers {
    version: String,
    start_time: Instant,
}

impl MetaHandlers {
    #[must_use]
    pub fn new(version: String, start_time: Instant) -> Self {
        Self {
            version,
            start_time,
        }
    }

    /// Metadata endpoint: service identity, uptime, deployed version
    pub async fn meta(State(handlers): State<Self>) -> Json<MetaResponse> {
        let uptime = handlers.start_time.elapsed().as_secs_f64();

        Json(MetaResponse {
            service: SERVICE_NAME.to_string(),
            status: "ok".to_string(),
            uptime_seconds: round_centis(uptime),
            version: handlers.version.clone(),
        })
    }
}

/// Round to two decimal places for the wire format
fn round_centis(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
