//! Pipeline API Handlers
//!
//! HTTP endpoints for pipeline management and execution.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use studio_core::domain::pipeline::Pipeline;
use studio_core::domain::stage::{CatalogEntry, StageKind};
use studio_core::dto::pipeline::{CreatePipeline, PipelineSummary};
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::{execution_service, pipeline_service};

fn map_pipeline_error(err: pipeline_service::PipelineError) -> ApiError {
    match err {
        pipeline_service::PipelineError::NotFound(id) => {
            ApiError::NotFound(format!("Pipeline {} not found", id))
        }
        pipeline_service::PipelineError::ProjectNotFound(id) => {
            ApiError::NotFound(format!("Project {} not found", id))
        }
        pipeline_service::PipelineError::ValidationError(msg) => ApiError::BadRequest(msg),
        pipeline_service::PipelineError::InvalidState(msg) => ApiError::BadRequest(msg),
    }
}

/// GET /stage/catalog
/// The fixed catalog of stage kinds and their display metadata
pub async fn stage_catalog() -> Json<Vec<CatalogEntry>> {
    Json(StageKind::catalog())
}

/// POST /pipeline/create
/// Create a new pipeline
pub async fn create_pipeline(
    State(state): State<AppState>,
    Json(req): Json<CreatePipeline>,
) -> ApiResult<Json<Pipeline>> {
    tracing::info!("Creating pipeline: {}", req.name);

    let pipeline = pipeline_service::create_pipeline(&state.store, req)
        .await
        .map_err(map_pipeline_error)?;

    Ok(Json(pipeline))
}

/// GET /pipeline/list
/// List all pipelines
pub async fn list_pipelines(State(state): State<AppState>) -> Json<Vec<PipelineSummary>> {
    tracing::debug!("Listing all pipelines");

    Json(pipeline_service::list_pipelines(&state.store).await)
}

/// GET /pipeline/{id}
/// Get pipeline by ID, including stages and their logs
pub async fn get_pipeline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Pipeline>> {
    tracing::debug!("Getting pipeline: {}", id);

    let pipeline = pipeline_service::get_pipeline(&state.store, id)
        .await
        .map_err(map_pipeline_error)?;

    Ok(Json(pipeline))
}

/// POST /pipeline/{id}/execute
/// Start executing a pipeline
pub async fn execute_pipeline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Executing pipeline: {}", id);

    execution_service::execute_pipeline(&state.store, &state.config, id)
        .await
        .map_err(map_pipeline_error)?;

    Ok(StatusCode::ACCEPTED)
}

/// DELETE /pipeline/{id}
/// Delete a pipeline, cancelling its execution if one is running
pub async fn delete_pipeline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting pipeline: {}", id);

    pipeline_service::delete_pipeline(&state.store, id)
        .await
        .map_err(map_pipeline_error)?;

    Ok(StatusCode::NO_CONTENT)
}
