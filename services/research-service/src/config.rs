//! Configuration for the research service

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Service name reported by `/meta`
pub const SERVICE_NAME: &str = "research-service";

/// Environment variable carrying the deployed service version
pub const SERVICE_VERSION_ENV: &str = "SERVICE_VERSION";

/// Version reported when `SERVICE_VERSION` is unset
pub const DEFAULT_VERSION: &str = "dev";

/// Research service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins
    pub allowed_origins: Vec<String>,
    /// Allowed methods; `"*"` mirrors the preflight request
    pub allowed_methods: Vec<String>,
    /// Allowed headers; `"*"` mirrors the preflight request
    pub allowed_headers: Vec<String>,
    /// Allow credentials
    pub allow_credentials: bool,
    /// Max age for preflight requests
    pub max_age_seconds: u64,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                timeout_seconds: 30,
                max_body_size: 1024 * 1024, // 1MB
            },
            cors: CorsConfig {
                enabled: true,
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["*".to_string()],
                allowed_headers: vec!["*".to_string()],
                allow_credentials: true,
                max_age_seconds: 600,
            },
        }
    }
}

impl ResearchConfig {
    /// Load configuration from file, layered with `RESEARCH_`-prefixed
    /// environment variables.
    ///
    /// Nested keys use `__`, e.g. `RESEARCH_SERVER__PORT=9000`; the CORS
    /// list keys take comma-separated values.
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("RESEARCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("cors.allowed_methods")
                    .with_list_parse_key("cors.allowed_headers"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Get server address
    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Resolve the service version from the process environment.
///
/// Read once at startup; the resulting string is held immutably for the
/// process lifetime.
#[must_use]
pub fn service_version() -> String {
    version_from(std::env::var(SERVICE_VERSION_ENV).ok())
}

/// Version resolution core, separated from the environment read
#[must_use]
pub fn version_from(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| DEFAULT_VERSION.to_string())
}
