use std::sync::Arc;

use crate::core::client::cluster_adapter::ClusterAdapter;
use crate::domain::selection::service::selection_service::SelectionService;

#[derive(Clone)]
pub struct AppState {
    pub selection_service: Arc<SelectionService>,
}

/// Wire the shared cluster adapter into the services, once per process.
pub fn build_app_state(adapter: Arc<dyn ClusterAdapter>, context: impl Into<String>) -> AppState {
    AppState {
        selection_service: Arc::new(SelectionService::new(adapter, context)),
    }
}
