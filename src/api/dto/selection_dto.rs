//! Selection API DTOs

use serde::Serialize;

use crate::domain::selection::model::{ClusterOverview, PodSummary};

#[derive(Debug, Serialize)]
pub struct PodListResponse {
    pub pods: Vec<PodSummary>,
}

#[derive(Debug, Serialize)]
pub struct NamespaceListResponse {
    pub context: String,
    pub namespaces: Vec<String>,
}

impl From<ClusterOverview> for NamespaceListResponse {
    fn from(overview: ClusterOverview) -> Self {
        Self {
            context: overview.context,
            namespaces: overview.namespaces.into_iter().map(|ns| ns.name).collect(),
        }
    }
}
