//! Studio Core
//!
//! Core types and abstractions for the MLOps Studio backend.
//!
//! This crate contains:
//! - Domain types: Core business entities (Project, Pipeline, Stage)
//! - DTOs: Data transfer objects for the HTTP API

pub mod domain;
pub mod dto;
