//! Project Service
//!
//! Business logic for project management.

use studio_core::domain::project::Project;
use studio_core::dto::project::CreateProject;
use uuid::Uuid;

use crate::repository::project_repository;
use crate::store::Store;

/// Service error type
#[derive(Debug)]
pub enum ProjectError {
    NotFound(Uuid),
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ProjectError>;

/// Create a new project
pub async fn create_project(store: &Store, req: CreateProject) -> Result<Project> {
    if req.name.trim().is_empty() {
        return Err(ProjectError::ValidationError(
            "Project name cannot be empty".to_string(),
        ));
    }

    let project = Project::new(req.name.trim().to_string(), req.description);

    project_repository::insert(store, project.clone()).await;

    tracing::info!("Project created: {} ({})", project.name, project.id);

    Ok(project)
}

/// Get a project by ID
pub async fn get_project(store: &Store, id: Uuid) -> Result<Project> {
    project_repository::find_by_id(store, id)
        .await
        .ok_or(ProjectError::NotFound(id))
}

/// List all projects
pub async fn list_projects(store: &Store) -> Vec<Project> {
    project_repository::list_all(store).await
}

/// Delete a project
///
/// Pipelines referencing the project are left alone; their reference is
/// opaque and never re-resolved after creation.
pub async fn delete_project(store: &Store, id: Uuid) -> Result<()> {
    let deleted = project_repository::remove(store, id).await;

    if !deleted {
        return Err(ProjectError::NotFound(id));
    }

    tracing::info!("Project deleted: {}", id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_project() {
        let store = Store::new();
        let req = CreateProject {
            name: "Churn Model".to_string(),
            description: Some("Customer churn prediction".to_string()),
        };

        let project = create_project(&store, req).await.unwrap();
        let fetched = get_project(&store, project.id).await.unwrap();
        assert_eq!(fetched, project);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let store = Store::new();
        let req = CreateProject {
            name: "  ".to_string(),
            description: None,
        };

        let result = create_project(&store, req).await;
        assert!(matches!(result, Err(ProjectError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_project() {
        let store = Store::new();
        let result = delete_project(&store, Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProjectError::NotFound(_))));
    }
}
