//! Pipeline DTOs for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::pipeline::{Pipeline, PipelineStatus};
use crate::domain::stage::StageKind;

/// Request to create a new pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePipeline {
    pub name: String,
    pub project_ref: Uuid,
    pub stage_kinds: Vec<StageKind>,
}

/// Lightweight pipeline summary for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub id: Uuid,
    pub name: String,
    pub project_ref: Uuid,
    pub status: PipelineStatus,
    pub progress_percent: u8,
    pub stage_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<Pipeline> for PipelineSummary {
    fn from(pipeline: Pipeline) -> Self {
        Self {
            id: pipeline.id,
            name: pipeline.name,
            project_ref: pipeline.project_ref,
            status: pipeline.status,
            progress_percent: pipeline.progress_percent,
            stage_count: pipeline.stages.len(),
            created_at: pipeline.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_summary_conversion() {
        let pipeline = Pipeline::build(
            "test",
            Uuid::new_v4(),
            &[StageKind::Ingestion, StageKind::Training],
        )
        .unwrap();

        let summary: PipelineSummary = pipeline.clone().into();
        assert_eq!(summary.id, pipeline.id);
        assert_eq!(summary.name, pipeline.name);
        assert_eq!(summary.status, PipelineStatus::Created);
        assert_eq!(summary.stage_count, 2);
    }
}
