//! Project DTOs for the HTTP API

use serde::{Deserialize, Serialize};

/// Request to create a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
}
