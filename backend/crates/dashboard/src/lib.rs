//! Dashboard Module - project overview behind Logto sign-in
//!
//! Clean Architecture structure:
//! - `domain/` - Project model
//! - `application/` - Read-only queries over projects
//! - `infra/` - Static mock dataset
//! - `presentation/` - HTML components and pages, JSON handlers, router
//!
//! The dataset is static sample data; nothing here writes.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{DashboardError, DashboardResult};
pub use infra::mock::mock_projects;
pub use presentation::router::{DashboardState, dashboard_router};

pub mod models {
    pub use crate::domain::project::*;
}
