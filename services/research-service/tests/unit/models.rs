//! Models unit tests

use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::json;

use research_service::models::{
    Candle, ComputeRequest, ComputeResponse, ErrorResponse, HealthResponse, MetaResponse,
};

fn sample_candle() -> Candle {
    Candle {
        time: 1_700_000_000,
        open: 100.0,
        high: 105.5,
        low: 99.25,
        close: 104.0,
        volume: 1234.5,
    }
}

#[rstest]
fn test_candle_wire_format() {
    let serialized = serde_json::to_value(sample_candle()).unwrap();

    assert_eq!(
        serialized,
        json!({
            "time": 1_700_000_000_i64,
            "open": 100.0,
            "high": 105.5,
            "low": 99.25,
            "close": 104.0,
            "volume": 1234.5
        })
    );
}

#[rstest]
fn test_candle_roundtrip() {
    let candle = sample_candle();
    let serialized = serde_json::to_string(&candle).unwrap();
    let deserialized: Candle = serde_json::from_str(&serialized).unwrap();

    assert_eq!(candle, deserialized);
}

#[rstest]
fn test_candle_rejects_missing_field() {
    // close absent
    let body = json!({
        "time": 1, "open": 1.0, "high": 1.0, "low": 1.0, "volume": 0.0
    });

    assert!(serde_json::from_value::<Candle>(body).is_err());
}

#[rstest]
fn test_candle_rejects_mistyped_field() {
    let body = json!({
        "time": 1, "open": 1.0, "high": 1.0, "low": 1.0, "close": "10.0", "volume": 0.0
    });

    assert!(serde_json::from_value::<Candle>(body).is_err());
}

#[rstest]
fn test_compute_request_accepts_empty_list() {
    // Schema-wise the empty list is valid; the aggregator rejects it later.
    let request: ComputeRequest = serde_json::from_value(json!({ "candles": [] })).unwrap();

    assert!(request.candles.is_empty());
}

#[rstest]
fn test_compute_response_wire_format() {
    let response = ComputeResponse {
        count: 3,
        last_close: 30.0,
        average_close: 20.0,
    };

    let serialized = serde_json::to_value(&response).unwrap();

    assert_eq!(
        serialized,
        json!({ "count": 3, "last_close": 30.0, "average_close": 20.0 })
    );
}

#[rstest]
fn test_health_response_wire_format() {
    let serialized = serde_json::to_value(HealthResponse::ok()).unwrap();

    assert_eq!(serialized, json!({ "status": "ok" }));
}

#[rstest]
fn test_meta_response_wire_format() {
    let response = MetaResponse {
        service: "research-service".to_string(),
        status: "ok".to_string(),
        uptime_seconds: 12.34,
        version: "dev".to_string(),
    };

    let serialized = serde_json::to_value(&response).unwrap();

    assert_eq!(
        serialized,
        json!({
            "service": "research-service",
            "status": "ok",
            "uptime_seconds": 12.34,
            "version": "dev"
        })
    );
}

#[rstest]
fn test_error_response_omits_absent_details() {
    let response = ErrorResponse {
        error: "empty_candles".to_string(),
        message: "candle list is empty".to_string(),
        details: None,
    };

    let serialized = serde_json::to_value(&response).unwrap();

    assert_eq!(
        serialized,
        json!({ "error": "empty_candles", "message": "candle list is empty" })
    );
}

#[rstest]
fn test_error_response_includes_details_when_present() {
    let mut details = rustc_hash::FxHashMap::default();
    details.insert("field".to_string(), "candles".to_string());

    let response = ErrorResponse {
        error: "empty_candles".to_string(),
        message: "candle list is empty".to_string(),
        details: Some(details),
    };

    let serialized = serde_json::to_value(&response).unwrap();

    assert_eq!(serialized["details"]["field"], "candles");
}
