//! Application Layer

pub mod projects;

pub use projects::{project_by_id, project_status_count};
