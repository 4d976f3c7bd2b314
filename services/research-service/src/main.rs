//! Research Service - Main Entry Point

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use research_service::{ResearchConfig, start_server};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "research_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let matches = research_service::cli::command().get_matches();

    // Print routes if requested
    if matches.get_flag("routes") {
        research_service::server::print_routes();
        return Ok(());
    }

    // Load configuration
    let default_config = research_service::cli::DEFAULT_CONFIG_PATH.to_string();
    let config_path = matches
        .get_one::<String>("config")
        .unwrap_or(&default_config);
    let config = match ResearchConfig::from_file(config_path) {
        Ok(config) => {
            info!("Loaded configuration from: {}", config_path);
            config
        }
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path, e);
            info!("Using default configuration");
            ResearchConfig::default()
        }
    };

    // Print startup information
    info!(
        "Starting research service v{} ({})",
        env!("CARGO_PKG_VERSION"),
        research_service::config::service_version()
    );
    info!("Server will bind to: {}", config.server_address());
    info!("CORS: {}", config.cors.enabled);
    info!("  Origins: {:?}", config.cors.allowed_origins);
    info!("  Credentials: {}", config.cors.allow_credentials);

    // Start the server
    if let Err(e) = start_server(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
