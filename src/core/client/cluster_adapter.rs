use async_trait::async_trait;
use kube::Client;
use thiserror::Error;

use crate::core::client::kube_resources::{Namespace, Pod};
use crate::core::client::{namespaces, pods};

/// Failure reported by the cluster API or the transport underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// The API server answered with a Status object (404, 403, ...).
    #[error("{message}")]
    Api { code: u16, message: String },

    /// The request never produced an API answer.
    #[error("cluster request failed: {0}")]
    Transport(String),
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) => ClusterError::Api {
                code: resp.code,
                message: resp.message,
            },
            other => ClusterError::Transport(other.to_string()),
        }
    }
}

/// Read-only cluster capabilities the selection flow depends on.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait ClusterAdapter: Send + Sync {
    async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClusterError>;

    async fn namespace_exists(&self, namespace: &str) -> Result<bool, ClusterError>;

    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, ClusterError>;

    async fn read_pod_log(
        &self,
        namespace: &str,
        pod_name: &str,
        tail_lines: i64,
    ) -> Result<String, ClusterError>;
}

/// kube-rs backed adapter. `Client` is a pooled handle, so one instance
/// serves the whole process.
#[derive(Clone)]
pub struct KubeClusterAdapter {
    client: Client,
}

impl KubeClusterAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterAdapter for KubeClusterAdapter {
    async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClusterError> {
        Ok(namespaces::fetch_namespaces(&self.client).await?)
    }

    async fn namespace_exists(&self, namespace: &str) -> Result<bool, ClusterError> {
        Ok(namespaces::fetch_namespace_by_name(&self.client, namespace)
            .await?
            .is_some())
    }

    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, ClusterError> {
        Ok(pods::fetch_pods_by_namespace(&self.client, namespace).await?)
    }

    async fn read_pod_log(
        &self,
        namespace: &str,
        pod_name: &str,
        tail_lines: i64,
    ) -> Result<String, ClusterError> {
        Ok(pods::fetch_pod_log_tail(&self.client, namespace, pod_name, tail_lines).await?)
    }
}
