//! Stage catalog and per-stage execution state

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of stage kinds a pipeline can be assembled from
///
/// The catalog is static: every kind has exactly one display entry, resolved
/// through total matches so an unknown kind is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Ingestion,
    Preparation,
    Training,
    Registry,
    Deployment,
    Inferencing,
    Monitoring,
}

impl StageKind {
    /// All stage kinds, in catalog order
    pub const ALL: [StageKind; 7] = [
        StageKind::Ingestion,
        StageKind::Preparation,
        StageKind::Training,
        StageKind::Registry,
        StageKind::Deployment,
        StageKind::Inferencing,
        StageKind::Monitoring,
    ];

    /// Human-readable name shown on stage cards
    pub fn display_name(self) -> &'static str {
        match self {
            StageKind::Ingestion => "Data Ingestion",
            StageKind::Preparation => "Data Preparation",
            StageKind::Training => "Model Training",
            StageKind::Registry => "Model Registry",
            StageKind::Deployment => "Model Deployment",
            StageKind::Inferencing => "Model Inference",
            StageKind::Monitoring => "Model Monitoring",
        }
    }

    /// Color tag used by the dashboard for the stage chip
    pub fn color_tag(self) -> &'static str {
        match self {
            StageKind::Ingestion => "blue",
            StageKind::Preparation => "cyan",
            StageKind::Training => "purple",
            StageKind::Registry => "amber",
            StageKind::Deployment => "green",
            StageKind::Inferencing => "orange",
            StageKind::Monitoring => "teal",
        }
    }

    /// Full catalog entry for this kind
    pub fn catalog_entry(self) -> CatalogEntry {
        CatalogEntry {
            kind: self,
            display_name: self.display_name(),
            color_tag: self.color_tag(),
        }
    }

    /// The complete ordered catalog
    pub fn catalog() -> Vec<CatalogEntry> {
        Self::ALL.iter().map(|k| k.catalog_entry()).collect()
    }
}

/// Display metadata for one stage kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub kind: StageKind,
    pub display_name: &'static str,
    pub color_tag: &'static str,
}

/// Execution status of a single stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// One unit of work within a pipeline's execution trace
///
/// The name is copied from the catalog at creation time and never re-derived,
/// so renaming a catalog entry does not retroactively change existing runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: Uuid,
    pub name: String,
    pub kind: StageKind,
    pub status: StageStatus,
    pub duration_ms: Option<u64>,
    pub log_lines: Vec<String>,
}

impl Stage {
    /// Creates a pending stage for the given kind
    pub fn new(kind: StageKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: kind.display_name().to_string(),
            kind,
            status: StageStatus::Pending,
            duration_ms: None,
            log_lines: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_kind_once() {
        let catalog = StageKind::catalog();
        assert_eq!(catalog.len(), StageKind::ALL.len());

        let kinds: HashSet<_> = catalog.iter().map(|e| e.kind).collect();
        assert_eq!(kinds.len(), StageKind::ALL.len());

        for entry in &catalog {
            assert!(!entry.display_name.is_empty());
            assert!(!entry.color_tag.is_empty());
        }
    }

    #[test]
    fn test_new_stage_is_pending() {
        let stage = Stage::new(StageKind::Training);
        assert_eq!(stage.name, "Model Training");
        assert_eq!(stage.status, StageStatus::Pending);
        assert!(stage.duration_ms.is_none());
        assert!(stage.log_lines.is_empty());
    }

    #[test]
    fn test_stage_kind_wire_format_is_lowercase() {
        let json = serde_json::to_string(&StageKind::Ingestion).unwrap();
        assert_eq!(json, "\"ingestion\"");
    }
}
