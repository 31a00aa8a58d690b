use axum::extract::State;
use axum::response::Html;
use http::StatusCode;
use tracing::warn;

use crate::app_state::AppState;
use crate::errors::AppError;
use crate::web::render::{render_error, render_index};

pub struct PageController;

impl PageController {
    /// Dashboard page. Cluster failures render the error page inline.
    pub async fn index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
        match state.selection_service.list_namespaces().await {
            Ok(overview) => (StatusCode::OK, Html(render_index(&overview))),
            Err(err) => {
                let err = AppError::from(err);
                warn!("Index page failed ({}): {}", err.status_code(), err);
                (err.status_code(), Html(render_error(&err.to_string())))
            }
        }
    }
}
