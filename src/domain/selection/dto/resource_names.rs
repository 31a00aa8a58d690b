use std::sync::LazyLock;

use regex::Regex;

/// RFC 1123 label: namespaces are limited to this form (63 chars max).
pub static DNS1123_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("DNS-1123 label pattern compiles")
});

/// RFC 1123 subdomain: dot-separated labels, the form pod names take
/// (253 chars max).
pub static DNS1123_SUBDOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("DNS-1123 subdomain pattern compiles")
});
