//! Pipeline Service
//!
//! Business logic for pipeline management.

use studio_core::domain::pipeline::{Pipeline, PipelineError as DomainError};
use studio_core::dto::pipeline::{CreatePipeline, PipelineSummary};
use uuid::Uuid;

use crate::repository::{pipeline_repository, project_repository};
use crate::store::Store;

/// Service error type
#[derive(Debug)]
pub enum PipelineError {
    NotFound(Uuid),
    ProjectNotFound(Uuid),
    ValidationError(String),
    InvalidState(String),
}

impl From<DomainError> for PipelineError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => PipelineError::ValidationError(msg),
            DomainError::InvalidState(msg) => PipelineError::InvalidState(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Create a new pipeline
pub async fn create_pipeline(store: &Store, req: CreatePipeline) -> Result<Pipeline> {
    // The project reference must point at an existing project
    project_repository::find_by_id(store, req.project_ref)
        .await
        .ok_or(PipelineError::ProjectNotFound(req.project_ref))?;

    let pipeline = Pipeline::build(&req.name, req.project_ref, &req.stage_kinds)?;

    pipeline_repository::insert(store, pipeline.clone()).await;

    tracing::info!("Pipeline created: {} ({})", pipeline.name, pipeline.id);

    Ok(pipeline)
}

/// Get a pipeline by ID
pub async fn get_pipeline(store: &Store, id: Uuid) -> Result<Pipeline> {
    pipeline_repository::find_by_id(store, id)
        .await
        .ok_or(PipelineError::NotFound(id))
}

/// List all pipelines as summaries
pub async fn list_pipelines(store: &Store) -> Vec<PipelineSummary> {
    pipeline_repository::list_all(store)
        .await
        .into_iter()
        .map(PipelineSummary::from)
        .collect()
}

/// Delete a pipeline
///
/// Cancels the execution ticker before discarding state, so an in-flight
/// tick can never mutate a pipeline the dashboard no longer tracks.
pub async fn delete_pipeline(store: &Store, id: Uuid) -> Result<()> {
    if let Some(handle) = store.take_execution(id).await {
        handle.abort();
        tracing::debug!("Cancelled execution ticker for pipeline: {}", id);
    }

    let deleted = pipeline_repository::remove(store, id).await;

    if !deleted {
        return Err(PipelineError::NotFound(id));
    }

    tracing::info!("Pipeline deleted: {}", id);

    Ok(())
}
