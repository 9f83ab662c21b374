//! docfinder server
//!
//! Fetches the doctor feed once and serves the directory search API.

use std::time::Duration;

use clap::Parser;
use docfinder_directory::{Directory, HttpDoctorSource};
use docfinder_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::{info, warn};

/// Fetches the doctor feed. A failed fetch still yields a directory, empty
/// and carrying a load-failure notice.
async fn load_directory(config: &ServerConfig) -> anyhow::Result<Directory> {
    let source = HttpDoctorSource::new(
        &config.source_url,
        Duration::from_secs(config.fetch_timeout),
    )?;
    info!(url = %source.url(), "Fetching doctor feed");

    let directory = Directory::load(&source).await;
    if directory.notice().is_some() {
        warn!("Serving an empty directory; the doctor feed could not be loaded");
    }
    Ok(directory)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        source = %config.source_url,
        "Starting docfinder"
    );

    let directory = load_directory(&config).await?;
    let app = create_app_with_config(directory, config.clone());
    serve(app, &config).await
}
