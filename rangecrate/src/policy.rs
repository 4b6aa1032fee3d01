use serde::Deserialize;

use crate::context::RequestContext;

/// Per-resource pagination settings consulted by the formatter.
///
/// Implement this on your own API descriptor, or use [`ResourcePolicy`] directly.
pub trait ApiDescriptor: Send + Sync {
    /// Largest `end` value a client may request
    fn max_range(&self) -> u64;

    /// Name advertised in `Accept-Range`, e.g. `"items"`
    fn resource_name(&self) -> &str;

    /// Value of the discovery `Link` header merged into every paginated response.
    ///
    /// Sent verbatim; the relation type is up to the implementor.
    fn discovery_link(&self, request: &RequestContext) -> String;
}

/// Static policy for a single collection resource.
///
/// ```rust,ignore
/// let policy = ResourcePolicy::new("items", 50)
///     .with_discovery_link(r#"</api/items/schema>; rel="describedby""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourcePolicy {
    pub max_range: u64,
    pub resource_name: String,
    #[serde(default)]
    pub discovery_link: String,
}

impl ResourcePolicy {
    #[must_use]
    pub fn new(resource_name: impl Into<String>, max_range: u64) -> Self {
        Self {
            max_range,
            resource_name: resource_name.into(),
            discovery_link: String::new(),
        }
    }

    #[must_use]
    pub fn with_discovery_link(mut self, link: impl Into<String>) -> Self {
        self.discovery_link = link.into();
        self
    }
}

impl ApiDescriptor for ResourcePolicy {
    fn max_range(&self) -> u64 {
        self.max_range
    }

    fn resource_name(&self) -> &str {
        &self.resource_name
    }

    fn discovery_link(&self, _request: &RequestContext) -> String {
        self.discovery_link.clone()
    }
}
