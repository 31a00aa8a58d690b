use serde::Deserialize;
use validator::Validate;

use crate::domain::selection::dto::resource_names::{DNS1123_LABEL, DNS1123_SUBDOMAIN};
use crate::domain::selection::model::{LogQuery, TailLines};

/// Form payload of `POST /get_logs`.
///
/// `tail_lines` stays a raw string here so garbage input can fall back to
/// the default instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LogTailRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 63, message = "namespace is required (at most 63 characters)"),
        regex(path = *DNS1123_LABEL, message = "namespace must be a lowercase DNS-1123 label")
    )]
    pub namespace: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 253, message = "pod_name is required (at most 253 characters)"),
        regex(path = *DNS1123_SUBDOMAIN, message = "pod_name must be a lowercase DNS-1123 subdomain")
    )]
    pub pod_name: String,

    pub tail_lines: Option<String>,
}

impl From<LogTailRequest> for LogQuery {
    fn from(req: LogTailRequest) -> Self {
        LogQuery {
            tail_lines: TailLines::parse_or_default(req.tail_lines.as_deref()),
            namespace: req.namespace,
            pod_name: req.pod_name,
        }
    }
}
