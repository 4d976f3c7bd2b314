//! Middleware for request logging and CORS

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::config::ResearchConfig;

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = duration.as_millis(),
        "Request processed"
    );

    response
}

/// CORS layer factory.
///
/// With credentials enabled, tower-http rejects literal wildcards, so a
/// `"*"` entry in the configured origin/method/header lists selects the
/// mirroring behavior instead (the preflight request's own values are
/// echoed back).
pub fn create_cors_layer(config: &ResearchConfig) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_credentials(config.cors.allow_credentials)
        .max_age(std::time::Duration::from_secs(config.cors.max_age_seconds));

    // Configure allowed origins
    if config.cors.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(AllowOrigin::mirror_request());
    } else {
        let origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    // Configure allowed methods
    if config.cors.allowed_methods.contains(&"*".to_string()) {
        cors = cors.allow_methods(AllowMethods::mirror_request());
    } else {
        let methods: Result<Vec<_>, _> = config
            .cors
            .allowed_methods
            .iter()
            .map(|method| method.parse())
            .collect();

        if let Ok(methods) = methods {
            cors = cors.allow_methods(methods);
        }
    }

    // Configure allowed headers
    if config.cors.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(AllowHeaders::mirror_request());
    } else {
        let headers: Result<Vec<_>, _> = config
            .cors
            .allowed_headers
            .iter()
            .map(|header| header.parse())
            .collect();

        if let Ok(headers) = headers {
            cors = cors.allow_headers(headers);
        }
    }

    cors
}
