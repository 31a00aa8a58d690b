use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::core::client::cluster_adapter::{ClusterAdapter, ClusterError};
use crate::core::client::mappers::{map_namespace_to_summary, map_pod_to_summary};
use crate::domain::selection::dto::log_tail_request::LogTailRequest;
use crate::domain::selection::dto::pod_list_request::PodListRequest;
use crate::domain::selection::model::{ClusterOverview, LogQuery, LogResult, PodSummary};

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("{0}")]
    InvalidInput(#[from] ValidationErrors),

    #[error("namespace \"{0}\" not found")]
    NamespaceNotFound(String),

    #[error(transparent)]
    Cluster(#[from] ClusterError),
}

/// Turns the operator's three questions into cluster reads.
///
/// Holds no per-request state; every call goes to the cluster and nothing is
/// retried.
pub struct SelectionService {
    adapter: Arc<dyn ClusterAdapter>,
    context: String,
}

impl SelectionService {
    pub fn new(adapter: Arc<dyn ClusterAdapter>, context: impl Into<String>) -> Self {
        Self {
            adapter,
            context: context.into(),
        }
    }

    /// Namespaces in the order the API lists them, plus the active context.
    pub async fn list_namespaces(&self) -> Result<ClusterOverview, SelectionError> {
        let namespaces = self
            .adapter
            .list_namespaces()
            .await?
            .iter()
            .filter_map(map_namespace_to_summary)
            .collect();

        Ok(ClusterOverview {
            context: self.context.clone(),
            namespaces,
        })
    }

    /// Pods of one namespace.
    ///
    /// The API answers an unknown namespace with an empty list, so an empty
    /// result is checked against the namespace itself: a missing namespace is
    /// [`SelectionError::NamespaceNotFound`], an existing one yields `[]`.
    /// The check is a namespace `get`, which needs its own RBAC grant; a
    /// denial surfaces as the API's 403.
    pub async fn list_pods(&self, req: PodListRequest) -> Result<Vec<PodSummary>, SelectionError> {
        req.validate()?;

        let pods: Vec<PodSummary> = self
            .adapter
            .list_pods(&req.namespace)
            .await?
            .iter()
            .filter_map(map_pod_to_summary)
            .collect();

        if pods.is_empty() && !self.adapter.namespace_exists(&req.namespace).await? {
            debug!("Namespace '{}' does not exist", req.namespace);
            return Err(SelectionError::NamespaceNotFound(req.namespace));
        }

        Ok(pods)
    }

    /// Last `tail_lines` lines of a pod's log, echoed with its query.
    pub async fn fetch_log_tail(&self, req: LogTailRequest) -> Result<LogResult, SelectionError> {
        req.validate()?;
        let query = LogQuery::from(req);

        let logs = self
            .adapter
            .read_pod_log(&query.namespace, &query.pod_name, query.tail_lines.get())
            .await?;

        Ok(LogResult {
            logs,
            pod: query.pod_name,
            namespace: query.namespace,
            tail_lines: query.tail_lines,
        })
    }
}
