//! Dashboard Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use auth::{LogtoClientConfig, require_auth};

use crate::domain::project::Project;
use crate::presentation::handlers;

/// Shared state for dashboard handlers
#[derive(Clone)]
pub struct DashboardState {
    pub projects: &'static [Project],
    pub client_config: Arc<LogtoClientConfig>,
}

/// Create the dashboard router.
///
/// Expects `auth::provide_auth_context` to be layered around it; without it
/// every caller is treated as not yet resolved and `/api/projects*` answers 401.
pub fn dashboard_router(state: DashboardState) -> Router {
    let api = Router::new()
        .route("/projects", get(handlers::list_projects))
        .route("/projects/status-count", get(handlers::status_count))
        .route("/projects/{id}", get(handlers::get_project))
        .route_layer(middleware::from_fn(require_auth))
        .route("/config", get(handlers::client_config));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api)
        .with_state(state)
}
