//! Data Transfer Objects for the HTTP API
//!
//! This module contains DTOs exchanged between the orchestrator and the
//! dashboard. DTOs are lightweight representations of domain entities
//! optimized for network transfer.

pub mod pipeline;
pub mod project;
