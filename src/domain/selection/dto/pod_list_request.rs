use serde::Deserialize;
use validator::Validate;

use crate::domain::selection::dto::resource_names::DNS1123_LABEL;

/// Form payload of `POST /get_pods`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PodListRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 63, message = "namespace is required (at most 63 characters)"),
        regex(path = *DNS1123_LABEL, message = "namespace must be a lowercase DNS-1123 label")
    )]
    pub namespace: String,
}
