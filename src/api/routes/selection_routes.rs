//! Selection routes: page load, pod listing, log tail

use axum::{routing::{get, post}, Router};

use crate::api::controller::page::PageController;
use crate::api::controller::selection::SelectionController;
use crate::app_state::AppState;

pub fn selection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(PageController::index))
        .route("/get_pods", post(SelectionController::get_pods))
        .route("/get_logs", post(SelectionController::get_logs))
}

/// JSON twin of the page-load query (e.g. /api/v1/namespaces)
pub fn selection_api_routes() -> Router<AppState> {
    Router::new().route("/namespaces", get(SelectionController::get_namespaces))
}
