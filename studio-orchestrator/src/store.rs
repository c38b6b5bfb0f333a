//! In-memory state store
//!
//! The dashboard specifies no persistence across restarts, so the
//! orchestrator keeps its collections in process memory behind async locks.
//! All mutation of a pipeline goes through the store, which is what keeps
//! the "at most one running stage" invariant intact under the multi-task
//! runtime.
//!
//! Each executing pipeline owns one ticker task; its `JoinHandle` is held
//! here so deletion can cancel the task explicitly instead of leaving a
//! dangling timer that probes for liveness.

use std::collections::HashMap;
use std::sync::Arc;

use studio_core::domain::pipeline::Pipeline;
use studio_core::domain::project::Project;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Shared in-memory state for the orchestrator
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    pipelines: RwLock<HashMap<Uuid, Pipeline>>,
    projects: RwLock<HashMap<Uuid, Project>>,
    executions: Mutex<HashMap<Uuid, JoinHandle<()>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pipelines(&self) -> &RwLock<HashMap<Uuid, Pipeline>> {
        &self.inner.pipelines
    }

    pub(crate) fn projects(&self) -> &RwLock<HashMap<Uuid, Project>> {
        &self.inner.projects
    }

    /// Registers the ticker task driving a pipeline execution
    pub async fn register_execution(&self, pipeline_id: Uuid, handle: JoinHandle<()>) {
        self.inner.executions.lock().await.insert(pipeline_id, handle);
    }

    /// Removes and returns the ticker task for a pipeline, if one is live
    ///
    /// The caller decides whether to abort it (deletion) or drop it
    /// (natural completion).
    pub async fn take_execution(&self, pipeline_id: Uuid) -> Option<JoinHandle<()>> {
        self.inner.executions.lock().await.remove(&pipeline_id)
    }

    /// Number of executions currently holding a ticker task
    pub async fn execution_count(&self) -> usize {
        self.inner.executions.lock().await.len()
    }
}
