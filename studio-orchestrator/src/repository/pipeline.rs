//! Pipeline Repository
//!
//! Handles all store operations related to pipelines.

use studio_core::domain::pipeline::Pipeline;
use uuid::Uuid;

use crate::store::Store;

/// Insert a new pipeline into the store
pub async fn insert(store: &Store, pipeline: Pipeline) {
    store.pipelines().write().await.insert(pipeline.id, pipeline);
}

/// Find a pipeline by ID
pub async fn find_by_id(store: &Store, id: Uuid) -> Option<Pipeline> {
    store.pipelines().read().await.get(&id).cloned()
}

/// List all pipelines, newest first
pub async fn list_all(store: &Store) -> Vec<Pipeline> {
    let mut pipelines: Vec<Pipeline> = store.pipelines().read().await.values().cloned().collect();
    pipelines.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    pipelines
}

/// Remove a pipeline, returning whether it existed
pub async fn remove(store: &Store, id: Uuid) -> bool {
    store.pipelines().write().await.remove(&id).is_some()
}

/// Apply a mutation to a pipeline under the store's write lock
///
/// Returns `None` when the pipeline no longer exists. The closure runs with
/// the lock held, which serializes all state transitions for a pipeline.
pub async fn with_pipeline_mut<F, T>(store: &Store, id: Uuid, mutate: F) -> Option<T>
where
    F: FnOnce(&mut Pipeline) -> T,
{
    store.pipelines().write().await.get_mut(&id).map(mutate)
}
