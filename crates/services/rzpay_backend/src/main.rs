// File: services/rzpay_backend/src/main.rs
use rzpay_backend::{build_app, AppState, RzpayServiceFactory};
use rzpay_common::logging;
use rzpay_config::{ensure_dotenv_loaded, load_config};
use std::process;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // .env first so RUST_LOG from it reaches the subscriber
    ensure_dotenv_loaded();
    logging::init();

    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("Failed to load config: {}", e);
            process::exit(1);
        }
    };
    info!("Loaded configuration: {:?}", config);

    let factory = match RzpayServiceFactory::new(&config).await {
        Ok(factory) => factory,
        Err(e) => {
            error!("Failed to initialize services: {}", e);
            process::exit(1);
        }
    };

    let state = AppState::new(config, Arc::new(factory));
    let app = build_app(&state);

    let addr = state.bind_address();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };
    info!("Starting server at http://{}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        process::exit(1);
    }
    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
