//! Dashboard Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::ProjectNotFound(_) => ErrorKind::NotFound,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Dashboard error");
        self.to_app_error().into_response()
    }
}
