use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod repository;
pub mod service;
pub mod store;

use crate::config::Config;
use crate::store::Store;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio_orchestrator=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MLOps Studio orchestrator...");

    let config = Config::from_env().expect("Invalid configuration");

    tracing::info!(
        "Execution pacing: tick every {:?}, stage durations {}..={}ms",
        config.tick_interval,
        config.stage_duration_ms.start(),
        config.stage_duration_ms.end()
    );

    let store = Store::new();

    // Build router with all API endpoints
    let app = api::create_router(store, config.clone());

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
