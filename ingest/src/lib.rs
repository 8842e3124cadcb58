pub mod api;
pub mod fetcher;
pub mod loader;
pub mod models;
pub mod services;
pub mod storage;
pub mod transform;

use std::net::SocketAddr;
use std::sync::Arc;

use common::Result;
use common::config::Settings;
use services::IngestService;
use tokio::net::TcpListener;

/// Runs the weather ingest HTTP service until the process is stopped.
pub async fn run_ingest_service(config_path: &str) -> Result<()> {
    // Load configuration; required fields fail here, not inside a request
    let config = Settings::new(config_path)?;

    let service = Arc::new(IngestService::new(&config));

    // Create API router
    let api_router = api::routes(Arc::clone(&service));

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = TcpListener::bind(addr).await?;
    println!("Weather ingest server listening on {}", addr);
    axum::serve(listener, api_router).await?;

    Ok(())
}

/// Runs the pipeline once for a single city, without the HTTP layer.
pub async fn run_ingest_once(config_path: &str, city: &str) -> Result<()> {
    let config = Settings::new(config_path)?;
    let service = IngestService::new(&config);

    service.ingest_city(city).await
}
