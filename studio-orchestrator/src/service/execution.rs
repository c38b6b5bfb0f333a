//! Execution Simulator
//!
//! Drives a created pipeline through its stages to completion, one stage per
//! tick, producing a synthetic step-by-step trace: statuses, randomized
//! durations, and log lines.
//!
//! Each execution owns exactly one ticker task. The task's handle is held in
//! the store, and deletion cancels it through the handle; the ticker never
//! has to probe whether its pipeline is still alive. Executions of different
//! pipelines are independent and may run concurrently.

use chrono::Utc;
use rand::Rng;
use studio_core::domain::pipeline::TickOutcome;
use tokio::task::JoinHandle;
use tokio::time;
use uuid::Uuid;

use crate::config::Config;
use crate::repository::pipeline_repository;
use crate::service::pipeline::{PipelineError, Result};
use crate::store::Store;

/// Start executing a pipeline
///
/// Transitions the pipeline from `created` to `running` (first stage starts
/// immediately) and spawns the ticker that completes one stage per tick.
pub async fn execute_pipeline(store: &Store, config: &Config, id: Uuid) -> Result<()> {
    let started = pipeline_repository::with_pipeline_mut(store, id, |p| p.start(Utc::now())).await;

    match started {
        None => return Err(PipelineError::NotFound(id)),
        Some(Err(e)) => return Err(e.into()),
        Some(Ok(())) => {}
    }

    let handle = spawn_ticker(store.clone(), config.clone(), id);
    store.register_execution(id, handle).await;

    tracing::info!("Pipeline execution started: {}", id);

    Ok(())
}

fn spawn_ticker(store: Store, config: Config, id: Uuid) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(config.tick_interval);
        // an interval's first tick completes immediately; the running stage
        // should get a full tick before it completes
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let duration_ms = rand::rng().random_range(config.stage_duration_ms.clone());
            let outcome =
                pipeline_repository::with_pipeline_mut(&store, id, |p| p.advance(duration_ms))
                    .await;

            match outcome {
                Some(Ok(TickOutcome::Advanced)) => {}
                Some(Ok(TickOutcome::Finished)) => {
                    tracing::info!("Pipeline execution completed: {}", id);
                    break;
                }
                Some(Err(e)) => {
                    tracing::warn!("Stopping ticker for pipeline {}: {:?}", id, e);
                    break;
                }
                // deletion cancels this task through its handle; reaching
                // here means the pipeline vanished while a tick was already
                // in flight
                None => break,
            }
        }

        store.take_execution(id).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{pipeline_service, project_service};
    use std::time::Duration;
    use studio_core::domain::pipeline::PipelineStatus;
    use studio_core::domain::stage::{StageKind, StageStatus};
    use studio_core::dto::pipeline::CreatePipeline;
    use studio_core::dto::project::CreateProject;

    const TICK: Duration = Duration::from_secs(3);

    async fn setup(kinds: &[StageKind]) -> (Store, Uuid) {
        let store = Store::new();
        let project = project_service::create_project(
            &store,
            CreateProject {
                name: "proj".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();

        let pipeline = pipeline_service::create_pipeline(
            &store,
            CreatePipeline {
                name: "run".to_string(),
                project_ref: project.id,
                stage_kinds: kinds.to_vec(),
            },
        )
        .await
        .unwrap();

        (store, pipeline.id)
    }

    /// Advances paused time by one tick interval, yielding around the
    /// advance so the ticker task gets polled.
    async fn tick_once() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        time::advance(TICK).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_stage_walkthrough() {
        let (store, id) = setup(&[
            StageKind::Ingestion,
            StageKind::Training,
            StageKind::Deployment,
        ])
        .await;

        execute_pipeline(&store, &Config::new(), id).await.unwrap();

        let p = pipeline_repository::find_by_id(&store, id).await.unwrap();
        assert_eq!(p.status, PipelineStatus::Running);
        assert!(p.executed_at.is_some());
        assert_eq!(p.stages[0].status, StageStatus::Running);
        assert_eq!(p.stages[1].status, StageStatus::Pending);
        assert_eq!(p.progress_percent, 0);

        tick_once().await;
        let p = pipeline_repository::find_by_id(&store, id).await.unwrap();
        assert_eq!(p.stages[0].status, StageStatus::Completed);
        assert_eq!(p.stages[1].status, StageStatus::Running);
        assert_eq!(p.stages[2].status, StageStatus::Pending);
        assert_eq!(p.progress_percent, 33);

        tick_once().await;
        tick_once().await;
        let p = pipeline_repository::find_by_id(&store, id).await.unwrap();
        assert_eq!(p.status, PipelineStatus::Completed);
        assert_eq!(p.progress_percent, 100);
        assert!(p.stages.iter().all(|s| s.status == StageStatus::Completed));

        let total: u64 = p.stages.iter().filter_map(|s| s.duration_ms).sum();
        assert_eq!(p.total_duration_ms, Some(total));
        assert!(total > 0);

        // the ticker deregisters itself on completion
        tick_once().await;
        assert_eq!(store.execution_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_durations_sampled_within_configured_range() {
        let (store, id) = setup(&[StageKind::Ingestion]).await;
        let config = Config::new();

        execute_pipeline(&store, &config, id).await.unwrap();
        tick_once().await;

        let p = pipeline_repository::find_by_id(&store, id).await.unwrap();
        let duration = p.stages[0].duration_ms.unwrap();
        assert!(config.stage_duration_ms.contains(&duration));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_unknown_pipeline() {
        let store = Store::new();
        let result = execute_pipeline(&store, &Config::new(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(PipelineError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_twice_is_invalid_state() {
        let (store, id) = setup(&[StageKind::Ingestion, StageKind::Training]).await;
        let config = Config::new();

        execute_pipeline(&store, &config, id).await.unwrap();

        let result = execute_pipeline(&store, &config, id).await;
        assert!(matches!(result, Err(PipelineError::InvalidState(_))));
        assert_eq!(store.execution_count().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_mid_run_leaves_timer_inert() {
        let (store, id) = setup(&[
            StageKind::Ingestion,
            StageKind::Training,
            StageKind::Deployment,
        ])
        .await;

        execute_pipeline(&store, &Config::new(), id).await.unwrap();
        tick_once().await;

        pipeline_service::delete_pipeline(&store, id).await.unwrap();
        assert_eq!(store.execution_count().await, 0);

        // a dangling ticker would try to mutate the deleted pipeline here
        tick_once().await;
        tick_once().await;

        assert!(pipeline_repository::find_by_id(&store, id).await.is_none());
        assert_eq!(store.execution_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_pipelines_advance_concurrently() {
        let (store, first) = setup(&[StageKind::Ingestion, StageKind::Training]).await;

        let project = project_service::create_project(
            &store,
            CreateProject {
                name: "other".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
        let second = pipeline_service::create_pipeline(
            &store,
            CreatePipeline {
                name: "other run".to_string(),
                project_ref: project.id,
                stage_kinds: vec![StageKind::Monitoring],
            },
        )
        .await
        .unwrap()
        .id;

        let config = Config::new();
        execute_pipeline(&store, &config, first).await.unwrap();
        execute_pipeline(&store, &config, second).await.unwrap();
        assert_eq!(store.execution_count().await, 2);

        tick_once().await;
        tick_once().await;

        let a = pipeline_repository::find_by_id(&store, first).await.unwrap();
        let b = pipeline_repository::find_by_id(&store, second).await.unwrap();
        assert_eq!(a.status, PipelineStatus::Completed);
        assert_eq!(b.status, PipelineStatus::Completed);
    }
}
