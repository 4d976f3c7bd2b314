//! REST API models and request/response types

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One OHLCV bar for a single time period.
///
/// Fields are deliberately unvalidated: `time` is an opaque ordering key,
/// and no relationship between `high`, `low`, and the other prices is
/// enforced. The aggregation only reads `close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp (opaque ordering key)
    pub time: i64,
    /// Opening price
    pub open: f64,
    /// Highest traded price
    pub high: f64,
    /// Lowest traded price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

/// Request body for `POST /compute`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// Ordered candle sequence, oldest first by convention
    pub candles: Vec<Candle>,
}

/// Response body for `POST /compute`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeResponse {
    /// Number of candles in the request
    pub count: usize,
    /// Close of the final candle in input order
    pub last_close: f64,
    /// Arithmetic mean of all close values
    pub average_close: f64,
}

/// Response body for `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Response body for `GET /meta`
#[derive(Debug, Serialize, Deserialize)]
pub struct MetaResponse {
    /// Service identifier
    pub service: String,
    /// Always `"ok"` while the process is serving
    pub status: String,
    /// Wall-clock seconds since process start, rounded to two decimals
    pub uptime_seconds: f64,
    /// Deployed version (`SERVICE_VERSION`, default `"dev"`)
    pub version: String,
}

/// Error envelope for request-level failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FxHashMap<String, String>>,
}
