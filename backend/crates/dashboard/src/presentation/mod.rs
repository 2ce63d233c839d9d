//! Presentation Layer
//!
//! HTML components and pages, JSON handlers, and the router.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod router;

pub use router::{DashboardState, dashboard_router};
