//! Repository Module
//!
//! Data access layer for the orchestrator.
//! Each repository handles store operations for a specific domain entity.

pub mod pipeline;
pub mod project;

// Re-export for convenience
pub use pipeline as pipeline_repository;
pub use project as project_repository;
