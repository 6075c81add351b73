//! Results server binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment (and `.env` when present)
//! 2. Logging
//! 3. The shared result store
//! 4. The actix-web HTTP server

use actix_web::{App, HttpServer, middleware};
use anyhow::{Context, Result};
use results_server::{ServerConfig, api, build_store, logging};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ServerConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting results server");
    tracing::info!("Results limit: {}", config.store.results_limit);
    tracing::info!("Store timing: {}", config.enable_store_timing);

    // 3. Build the store shared by all workers
    let store = build_store(&config);

    // 4. Build and run the HTTP server
    let (host, port) = config.bind_address();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(api::configure_routes(store.clone()))
    });

    if config.workers > 0 {
        server = server.workers(config.workers);
    }

    let server = server
        .bind((host.as_str(), port))
        .with_context(|| format!("failed to bind {host}:{port}"))?;

    tracing::info!("Listening on http://{}:{}", host, port);
    server.run().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
