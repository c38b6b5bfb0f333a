//! Project API Handlers
//!
//! HTTP endpoints for project management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use studio_core::domain::project::Project;
use studio_core::dto::project::CreateProject;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::project_service;

fn map_project_error(err: project_service::ProjectError) -> ApiError {
    match err {
        project_service::ProjectError::NotFound(id) => {
            ApiError::NotFound(format!("Project {} not found", id))
        }
        project_service::ProjectError::ValidationError(msg) => ApiError::BadRequest(msg),
    }
}

/// POST /project/create
/// Create a new project
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProject>,
) -> ApiResult<Json<Project>> {
    tracing::info!("Creating project: {}", req.name);

    let project = project_service::create_project(&state.store, req)
        .await
        .map_err(map_project_error)?;

    Ok(Json(project))
}

/// GET /project/list
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    tracing::debug!("Listing all projects");

    Json(project_service::list_projects(&state.store).await)
}

/// GET /project/{id}
/// Get project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    tracing::debug!("Getting project: {}", id);

    let project = project_service::get_project(&state.store, id)
        .await
        .map_err(map_project_error)?;

    Ok(Json(project))
}

/// DELETE /project/{id}
/// Delete a project
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting project: {}", id);

    project_service::delete_project(&state.store, id)
        .await
        .map_err(map_project_error)?;

    Ok(StatusCode::NO_CONTENT)
}
