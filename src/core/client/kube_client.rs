use std::path::PathBuf;

use kube::config::{InClusterError, KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::{Client, Config};
use thiserror::Error;
use tracing::{debug, info};

/// Context name reported when running on an in-cluster service account.
pub const IN_CLUSTER_CONTEXT: &str = "in-cluster";

/// Kubeconfig location and context override. `None` means the kube-rs
/// defaults: `$KUBECONFIG`, then `~/.kube/config`, then its current-context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KubeconfigSettings {
    pub path: Option<PathBuf>,
    pub context: Option<String>,
}

/// How the process obtains cluster credentials, selected once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// In-cluster service account first, kubeconfig file second.
    Auto(KubeconfigSettings),
    InCluster,
    Kubeconfig(KubeconfigSettings),
}

impl Default for CredentialSource {
    fn default() -> Self {
        CredentialSource::Auto(KubeconfigSettings::default())
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("in-cluster credentials unavailable: {0}")]
    InCluster(#[source] InClusterError),

    #[error("kubeconfig could not be loaded: {0}")]
    Kubeconfig(#[source] KubeconfigError),

    #[error("failed to build Kubernetes client: {0}")]
    Client(#[source] kube::Error),

    #[error("no usable cluster credentials (in-cluster: {in_cluster}; kubeconfig: {kubeconfig})")]
    NoCredentials { in_cluster: String, kubeconfig: String },
}

/// A ready client plus the name of the context it was built from.
#[derive(Clone)]
pub struct KubeConnection {
    pub client: Client,
    pub context: String,
}

/// Creates a Kubernetes client from the configured credential source
pub async fn build_kube_client(source: &CredentialSource) -> Result<KubeConnection, CredentialError> {
    let connection = match source {
        CredentialSource::InCluster => connect_in_cluster()?,
        CredentialSource::Kubeconfig(settings) => connect_kubeconfig(settings).await?,
        CredentialSource::Auto(settings) => match connect_in_cluster() {
            Ok(connection) => connection,
            Err(in_cluster_err) => {
                debug!("In-cluster configuration unavailable, falling back to kubeconfig: {in_cluster_err}");
                connect_kubeconfig(settings)
                    .await
                    .map_err(|kubeconfig_err| CredentialError::NoCredentials {
                        in_cluster: in_cluster_err.to_string(),
                        kubeconfig: kubeconfig_err.to_string(),
                    })?
            }
        },
    };

    info!("Kubernetes client initialized for context '{}'", connection.context);
    Ok(connection)
}

fn connect_in_cluster() -> Result<KubeConnection, CredentialError> {
    let config = Config::incluster().map_err(CredentialError::InCluster)?;
    let client = Client::try_from(config).map_err(CredentialError::Client)?;

    debug!("Using in-cluster configuration");
    Ok(KubeConnection {
        client,
        context: IN_CLUSTER_CONTEXT.to_string(),
    })
}

async fn connect_kubeconfig(settings: &KubeconfigSettings) -> Result<KubeConnection, CredentialError> {
    let kubeconfig = match &settings.path {
        Some(path) => {
            debug!("Reading kubeconfig from {}", path.display());
            Kubeconfig::read_from(path)
        }
        None => Kubeconfig::read(),
    }
    .map_err(CredentialError::Kubeconfig)?;

    let context = resolve_context_name(&kubeconfig, settings.context.as_deref());
    let options = KubeConfigOptions {
        context: settings.context.clone(),
        ..Default::default()
    };

    let config = Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .map_err(CredentialError::Kubeconfig)?;
    let client = Client::try_from(config).map_err(CredentialError::Client)?;

    debug!("Using kubeconfig context '{}'", context);
    Ok(KubeConnection { client, context })
}

/// The context a kubeconfig resolves to: the explicit override, else its
/// current-context.
pub fn resolve_context_name(kubeconfig: &Kubeconfig, requested: Option<&str>) -> String {
    requested
        .map(str::to_string)
        .or_else(|| kubeconfig.current_context.clone())
        .unwrap_or_else(|| "unknown".to_string())
}
