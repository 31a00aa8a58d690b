use axum::{response::IntoResponse, Json};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::core::client::cluster_adapter::ClusterError;
use crate::domain::selection::service::selection_service::SelectionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    /// Cluster API failure; the message is the API's own.
    #[error("{message}")]
    K8sApiError { status: StatusCode, message: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::K8sApiError { status, .. } => *status,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::InvalidInput(e) => AppError::BodyParsingError(e.to_string()),
            SelectionError::NamespaceNotFound(namespace) => {
                AppError::NotFound(format!("namespace \"{namespace}\" not found"))
            }
            SelectionError::Cluster(e) => e.into(),
        }
    }
}

impl From<ClusterError> for AppError {
    fn from(err: ClusterError) -> Self {
        // API status codes pass through; anything that is not an error code
        // or never reached the API is a gateway failure.
        let status = match &err {
            ClusterError::Api { code, .. } => StatusCode::from_u16(*code)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ClusterError::Transport(_) => StatusCode::BAD_GATEWAY,
        };

        AppError::K8sApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // String provided by thiserror → `{ "error": ... }`, never `logs`
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
