/// Maps k8s-openapi types → dashboard view models
use crate::core::client::kube_resources::{Namespace, Pod};
use crate::domain::selection::model::{NamespaceSummary, PodSummary};

/// Phase reported when the cluster has not filled in `status.phase` yet.
pub const UNKNOWN_PHASE: &str = "Unknown";

/// Converts a Namespace into a NamespaceSummary; unnamed objects are skipped
pub fn map_namespace_to_summary(namespace: &Namespace) -> Option<NamespaceSummary> {
    namespace
        .metadata
        .name
        .as_ref()
        .map(|name| NamespaceSummary { name: name.clone() })
}

/// Converts a Pod into a PodSummary carrying its phase
pub fn map_pod_to_summary(pod: &Pod) -> Option<PodSummary> {
    let name = pod.metadata.name.clone()?;
    let status = pod
        .status
        .as_ref()
        .and_then(|s| s.phase.clone())
        .unwrap_or_else(|| UNKNOWN_PHASE.to_string());

    Some(PodSummary { name, status })
}
