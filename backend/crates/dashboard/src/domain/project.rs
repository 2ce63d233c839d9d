//! Project
//!
//! A research project as listed on the dashboard. Timestamps are UTC and
//! serialize as RFC 3339.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Complete,
    Running,
    Setup,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Complete => "complete",
            ProjectStatus::Running => "running",
            ProjectStatus::Setup => "setup",
        }
    }

    /// Human label
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Complete => "Complete",
            ProjectStatus::Running => "Running",
            ProjectStatus::Setup => "Setup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

/// Number of projects in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStatusCount {
    pub complete: usize,
    pub running: usize,
    pub setup: usize,
}

impl ProjectStatusCount {
    pub fn record(&mut self, status: ProjectStatus) {
        match status {
            ProjectStatus::Complete => self.complete += 1,
            ProjectStatus::Running => self.running += 1,
            ProjectStatus::Setup => self.setup += 1,
        }
    }

    pub fn get(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Complete => self.complete,
            ProjectStatus::Running => self.running,
            ProjectStatus::Setup => self.setup,
        }
    }

    pub fn total(&self) -> usize {
        self.complete + self.running + self.setup
    }
}
