//! Core domain types
//!
//! This module contains the core domain structures used across Studio
//! services. These types represent the fundamental business entities shared
//! between the orchestrator (which owns the collections) and the dashboard
//! (which renders read-only snapshots of them).

pub mod pipeline;
pub mod project;
pub mod stage;
