//! API Module
//!
//! HTTP API layer for the orchestrator.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod pipeline;
pub mod project;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::Store;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}

/// Create the main API router with all endpoints
pub fn create_router(store: Store, config: Config) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Stage catalog
        .route("/stage/catalog", get(pipeline::stage_catalog))
        // Project endpoints
        .route("/project/create", post(project::create_project))
        .route("/project/list", get(project::list_projects))
        .route("/project/{id}", get(project::get_project))
        .route("/project/{id}", delete(project::delete_project))
        // Pipeline endpoints
        .route("/pipeline/create", post(pipeline::create_pipeline))
        .route("/pipeline/list", get(pipeline::list_pipelines))
        .route("/pipeline/{id}", get(pipeline::get_pipeline))
        .route("/pipeline/{id}", delete(pipeline::delete_pipeline))
        .route("/pipeline/{id}/execute", post(pipeline::execute_pipeline))
        // Add state and middleware; the dashboard is a browser SPA, so CORS
        // stays open
        .with_state(AppState { store, config })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
