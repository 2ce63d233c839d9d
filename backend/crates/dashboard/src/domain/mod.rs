//! Domain Layer

pub mod project;

pub use project::{Project, ProjectStatus, ProjectStatusCount};
