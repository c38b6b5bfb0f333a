//! Service Module
//!
//! Business logic layer for the orchestrator.
//! Services orchestrate between repositories and contain domain logic.

pub mod execution;
pub mod pipeline;
pub mod project;

// Re-export for convenience
pub use execution as execution_service;
pub use pipeline as pipeline_service;
pub use project as project_service;
