//! Mock Project Data
//!
//! Sample records used in place of a real project store.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::domain::project::{Project, ProjectStatus};

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    status: ProjectStatus,
    created_at: &'static str,
    updated_at: &'static str,
    completed_at: Option<&'static str>,
    dataset_count: Option<u32>,
    last_activity: Option<&'static str>,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "proj-001",
        name: "Protein Folding Analysis",
        description: "Structure prediction for a panel of membrane proteins.",
        status: ProjectStatus::Complete,
        created_at: "2024-01-15T09:00:00Z",
        updated_at: "2024-03-02T17:45:00Z",
        completed_at: Some("2024-03-02T17:45:00Z"),
        dataset_count: Some(12),
        last_activity: Some("2024-03-02T17:45:00Z"),
    },
    Seed {
        id: "proj-002",
        name: "Gene Expression Atlas",
        description: "Single-cell RNA-seq across tissue samples.",
        status: ProjectStatus::Running,
        created_at: "2024-02-01T10:30:00Z",
        updated_at: "2024-04-18T08:12:00Z",
        completed_at: None,
        dataset_count: Some(8),
        last_activity: Some("2024-04-18T08:12:00Z"),
    },
    Seed {
        id: "proj-003",
        name: "Antibody Screening",
        description: "High-throughput binding assay results.",
        status: ProjectStatus::Running,
        created_at: "2024-02-20T14:00:00Z",
        updated_at: "2024-04-16T11:05:00Z",
        completed_at: None,
        dataset_count: Some(5),
        last_activity: Some("2024-04-16T11:05:00Z"),
    },
    Seed {
        id: "proj-004",
        name: "Metabolomics Pilot",
        description: "Mass-spec profiling of the pilot cohort.",
        status: ProjectStatus::Setup,
        created_at: "2024-04-10T16:20:00Z",
        updated_at: "2024-04-10T16:20:00Z",
        completed_at: None,
        dataset_count: None,
        last_activity: None,
    },
    Seed {
        id: "proj-005",
        name: "CRISPR Knockout Library",
        description: "Genome-wide knockout screen in HEK293 cells.",
        status: ProjectStatus::Complete,
        created_at: "2023-11-05T08:45:00Z",
        updated_at: "2024-01-28T12:00:00Z",
        completed_at: Some("2024-01-28T12:00:00Z"),
        dataset_count: Some(20),
        last_activity: Some("2024-01-28T12:00:00Z"),
    },
    Seed {
        id: "proj-006",
        name: "Microbiome Survey",
        description: "16S sequencing of environmental samples.",
        status: ProjectStatus::Setup,
        created_at: "2024-04-17T09:10:00Z",
        updated_at: "2024-04-17T09:10:00Z",
        completed_at: None,
        dataset_count: Some(0),
        last_activity: None,
    },
];

fn timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|t| t.with_timezone(&Utc))
}

fn optional_timestamp(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, chrono::ParseError> {
    raw.map(timestamp).transpose()
}

impl Seed {
    fn to_project(&self) -> Result<Project, chrono::ParseError> {
        Ok(Project {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            status: self.status,
            created_at: timestamp(self.created_at)?,
            updated_at: timestamp(self.updated_at)?,
            completed_at: optional_timestamp(self.completed_at)?,
            dataset_count: self.dataset_count,
            last_activity: optional_timestamp(self.last_activity)?,
        })
    }
}

/// Seeds with an unparseable timestamp are left out with a warning
static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    SEEDS
        .iter()
        .filter_map(|seed| match seed.to_project() {
            Ok(project) => Some(project),
            Err(e) => {
                tracing::warn!(id = seed.id, error = %e, "Skipping mock project with bad timestamp");
                None
            }
        })
        .collect()
});

pub fn mock_projects() -> &'static [Project] {
    &PROJECTS
}
