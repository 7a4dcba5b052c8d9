//! Public origin a request was addressed to.

/// Scheme and host the client used to reach the service, as reported by the
/// edge proxy. Used to build absolute short and redirect URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginInfo {
    pub scheme: String,
    pub host: String,
}

impl OriginInfo {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Returns `scheme://host` with a leading `/api` path segment removed.
    ///
    /// Proxies that mount the service under `/api` may forward the prefix as
    /// part of the host; the public site lives at the root.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, strip_api_segment(&self.host))
    }
}

fn strip_api_segment(host: &str) -> String {
    let Some(slash) = host.find('/') else {
        return host.to_string();
    };
    let (authority, path) = host.split_at(slash);

    match path.strip_prefix("/api") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            format!("{}{}", authority, rest.trim_end_matches('/'))
        }
        _ => host.trim_end_matches('/').to_string(),
    }
}
