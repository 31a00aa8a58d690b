//! Selection controller: namespace → pod → log tail

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::{Form, Json};

use crate::api::dto::selection_dto::{NamespaceListResponse, PodListResponse};
use crate::api::util::form::parse_form;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::selection::dto::log_tail_request::LogTailRequest;
use crate::domain::selection::dto::pod_list_request::PodListRequest;
use crate::domain::selection::model::LogResult;
use crate::errors::AppError;

pub struct SelectionController;

impl SelectionController {
    pub async fn get_namespaces(
        State(state): State<AppState>,
    ) -> Result<Json<NamespaceListResponse>, AppError> {
        to_json(
            state
                .selection_service
                .list_namespaces()
                .await
                .map(NamespaceListResponse::from),
        )
    }

    pub async fn get_pods(
        State(state): State<AppState>,
        form: Result<Form<PodListRequest>, FormRejection>,
    ) -> Result<Json<PodListResponse>, AppError> {
        let req = parse_form(form)?;
        to_json(
            state
                .selection_service
                .list_pods(req)
                .await
                .map(|pods| PodListResponse { pods }),
        )
    }

    /// `tail_lines` is optional; bad values fall back to the default count
    pub async fn get_logs(
        State(state): State<AppState>,
        form: Result<Form<LogTailRequest>, FormRejection>,
    ) -> Result<Json<LogResult>, AppError> {
        let req = parse_form(form)?;
        to_json(state.selection_service.fetch_log_tail(req).await)
    }
}
