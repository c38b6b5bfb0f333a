//! Project Repository
//!
//! Handles all store operations related to projects.

use studio_core::domain::project::Project;
use uuid::Uuid;

use crate::store::Store;

/// Insert a new project into the store
pub async fn insert(store: &Store, project: Project) {
    store.projects().write().await.insert(project.id, project);
}

/// Find a project by ID
pub async fn find_by_id(store: &Store, id: Uuid) -> Option<Project> {
    store.projects().read().await.get(&id).cloned()
}

/// List all projects, newest first
pub async fn list_all(store: &Store) -> Vec<Project> {
    let mut projects: Vec<Project> = store.projects().read().await.values().cloned().collect();
    projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    projects
}

/// Remove a project, returning whether it existed
pub async fn remove(store: &Store, id: Uuid) -> bool {
    store.projects().write().await.remove(&id).is_some()
}
