//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;

use auth::{AuthContext, LogtoClientConfig};

use crate::application::{project_by_id, project_status_count};
use crate::domain::project::{Project, ProjectStatusCount};
use crate::error::{DashboardError, DashboardResult};
use crate::presentation::pages::dashboard_page;
use crate::presentation::router::DashboardState;

/// GET /
pub async fn index(State(state): State<DashboardState>, auth: AuthContext) -> Html<String> {
    let count = project_status_count(state.projects);
    Html(dashboard_page(&auth, state.projects, &count))
}

/// GET /api/projects
pub async fn list_projects(State(state): State<DashboardState>) -> Json<Vec<Project>> {
    Json(state.projects.to_vec())
}

/// GET /api/projects/status-count
pub async fn status_count(State(state): State<DashboardState>) -> Json<ProjectStatusCount> {
    Json(project_status_count(state.projects))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> DashboardResult<Json<Project>> {
    project_by_id(state.projects, &id)
        .cloned()
        .map(Json)
        .ok_or(DashboardError::ProjectNotFound(id))
}

/// GET /api/config
pub async fn client_config(State(state): State<DashboardState>) -> Json<LogtoClientConfig> {
    Json(state.client_config.as_ref().clone())
}
