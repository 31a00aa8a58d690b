use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::core::client::kube_client::{CredentialSource, KubeconfigSettings};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PODLOG_BIND_ADDR '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("PODLOG_CREDENTIALS '{0}' is not one of auto, in-cluster, kubeconfig")]
    UnknownCredentialMode(String),
}

/// Process configuration, read from the environment (and `.env`) at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub credentials: CredentialSource,
    /// Also write daily-rolling log files here when set.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get("PODLOG_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let kubeconfig = KubeconfigSettings {
            path: get("PODLOG_KUBECONFIG").map(PathBuf::from),
            context: get("PODLOG_CONTEXT"),
        };

        let credentials = match get("PODLOG_CREDENTIALS")
            .map(|m| m.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("auto") => CredentialSource::Auto(kubeconfig),
            Some("in-cluster") | Some("incluster") => CredentialSource::InCluster,
            Some("kubeconfig") => CredentialSource::Kubeconfig(kubeconfig),
            Some(other) => return Err(ConfigError::UnknownCredentialMode(other.to_string())),
        };

        Ok(Self {
            bind_addr,
            credentials,
            log_dir: get("PODLOG_LOG_DIR").map(PathBuf::from),
        })
    }
}
