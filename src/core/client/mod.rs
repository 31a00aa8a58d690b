// Kube-rs based Kubernetes client
pub mod cluster_adapter;
pub mod kube_client;
pub mod kube_resources;
pub mod mappers;
pub mod namespaces;
pub mod pods;
