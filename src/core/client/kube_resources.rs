/// Re-export the Kubernetes resource types the dashboard reads from k8s-openapi
/// so the rest of the crate names them from one place.

pub use k8s_openapi::api::core::v1::{Namespace, Pod};
