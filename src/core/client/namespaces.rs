use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Namespace;

/// Fetch all namespaces in the cluster, in the order the API returns them
pub async fn fetch_namespaces(client: &Client) -> kube::Result<Vec<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces.list(&ListParams::default()).await?;

    debug!("Discovered {} namespace(s)", namespace_list.items.len());
    Ok(namespace_list.items)
}

/// Look up a single namespace by name; `None` when the API reports 404
pub async fn fetch_namespace_by_name(client: &Client, name: &str) -> kube::Result<Option<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace = namespaces.get_opt(name).await?;

    debug!("Namespace '{}' exists: {}", name, namespace.is_some());
    Ok(namespace)
}
