//! Pipeline domain type and its execution state machine
//!
//! A pipeline is an ordered sequence of stages. Execution is strictly
//! sequential: at most one stage is running at any time, and stages complete
//! in the order they appear. The state machine here is pure; the
//! orchestrator's execution driver supplies the timing and the synthetic
//! stage durations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::stage::{Stage, StageKind, StageStatus};

/// Aggregated status of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Created,
    Running,
    Completed,
    Failed,
}

/// Error from pipeline construction or a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Validation(String),
    InvalidState(String),
}

/// Result of advancing a running pipeline by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The running stage completed and the next stage started
    Advanced,
    /// The last stage completed; the pipeline is now terminal
    Finished,
}

/// An ordered sequence of stages representing one ML workflow run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: Uuid,
    pub name: String,
    pub project_ref: Uuid,
    pub stages: Vec<Stage>,
    pub status: PipelineStatus,
    pub progress_percent: u8,
    pub created_at: DateTime<Utc>,
    pub executed_at: Option<DateTime<Utc>>,
    pub total_duration_ms: Option<u64>,
}

impl Pipeline {
    /// Builds a pipeline from an ordered selection of stage kinds
    ///
    /// Duplicated kinds are allowed; the order given here is the order the
    /// stages will execute in. Project existence is checked by the caller,
    /// the reference is opaque at this level.
    pub fn build(
        name: &str,
        project_ref: Uuid,
        ordered_kinds: &[StageKind],
    ) -> Result<Self, PipelineError> {
        if name.trim().is_empty() {
            return Err(PipelineError::Validation(
                "Pipeline name cannot be empty".to_string(),
            ));
        }

        if ordered_kinds.is_empty() {
            return Err(PipelineError::Validation(
                "Pipeline must contain at least one stage".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            project_ref,
            stages: ordered_kinds.iter().map(|k| Stage::new(*k)).collect(),
            status: PipelineStatus::Created,
            progress_percent: 0,
            created_at: Utc::now(),
            executed_at: None,
            total_duration_ms: None,
        })
    }

    /// Starts execution: `created -> running`
    ///
    /// Marks the first stage as running with its starting log line. The stage
    /// order is fixed from this point on.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), PipelineError> {
        if self.status != PipelineStatus::Created {
            return Err(PipelineError::InvalidState(format!(
                "Pipeline {} is not in created state (current: {:?})",
                self.id, self.status
            )));
        }

        let Some(first) = self.stages.first_mut() else {
            return Err(PipelineError::InvalidState(format!(
                "Pipeline {} has no stages",
                self.id
            )));
        };

        first.status = StageStatus::Running;
        first.log_lines.push(format!("Starting {}...", first.name));

        self.status = PipelineStatus::Running;
        self.executed_at = Some(now);

        Ok(())
    }

    /// Advances a running pipeline by one tick
    ///
    /// The currently running stage completes with the supplied synthetic
    /// duration, then either the next stage starts or the pipeline reaches
    /// `completed`.
    pub fn advance(&mut self, duration_ms: u64) -> Result<TickOutcome, PipelineError> {
        if self.status != PipelineStatus::Running {
            return Err(PipelineError::InvalidState(format!(
                "Pipeline {} is not running (current: {:?})",
                self.id, self.status
            )));
        }

        let index = self
            .running_stage_index()
            .ok_or_else(|| PipelineError::InvalidState(format!(
                "Pipeline {} is running but has no running stage",
                self.id
            )))?;

        let stage = &mut self.stages[index];
        stage.status = StageStatus::Completed;
        stage.duration_ms = Some(duration_ms);
        stage.log_lines.push(format!("Processing {}...", stage.name));
        stage
            .log_lines
            .push(format!("✓ {} completed in {}ms", stage.name, duration_ms));

        if index + 1 < self.stages.len() {
            let next = &mut self.stages[index + 1];
            next.status = StageStatus::Running;
            next.log_lines.push(format!("Starting {}...", next.name));
            self.recompute_progress();
            Ok(TickOutcome::Advanced)
        } else {
            self.status = PipelineStatus::Completed;
            self.progress_percent = 100;
            self.total_duration_ms = Some(self.stages.iter().filter_map(|s| s.duration_ms).sum());
            for stage in &mut self.stages {
                stage
                    .log_lines
                    .push("✓ Stage completed successfully".to_string());
            }
            Ok(TickOutcome::Finished)
        }
    }

    /// Fails the running stage and the pipeline with it
    ///
    /// No tick ever produces this on its own; fault injection is the
    /// caller's decision.
    pub fn fail(&mut self, reason: &str) -> Result<(), PipelineError> {
        if self.status != PipelineStatus::Running {
            return Err(PipelineError::InvalidState(format!(
                "Pipeline {} is not running (current: {:?})",
                self.id, self.status
            )));
        }

        if let Some(index) = self.running_stage_index() {
            let stage = &mut self.stages[index];
            stage.status = StageStatus::Failed;
            stage
                .log_lines
                .push(format!("✗ {} failed: {}", stage.name, reason));
        }

        self.status = PipelineStatus::Failed;
        Ok(())
    }

    /// Index of the stage currently running, if any
    pub fn running_stage_index(&self) -> Option<usize> {
        self.stages
            .iter()
            .position(|s| s.status == StageStatus::Running)
    }

    fn recompute_progress(&mut self) {
        let completed = self
            .stages
            .iter()
            .filter(|s| s.status == StageStatus::Completed)
            .count();
        self.progress_percent =
            (100.0 * completed as f64 / self.stages.len() as f64).round() as u8;
    }
}
