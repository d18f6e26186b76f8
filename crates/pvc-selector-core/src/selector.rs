//! Resource selector: which items an action wants to see.

use serde::{Deserialize, Serialize};

/// Filter an action declares to the host. Empty lists mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSelector {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_namespaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,
}

impl ResourceSelector {
    pub fn for_resources(resources: &[&str]) -> Self {
        Self {
            included_resources: resources.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Whether `resource` (plural, optionally group-qualified) passes the filter.
    pub fn includes_resource(&self, resource: &str) -> bool {
        let resource = bare_resource(resource);
        if self
            .excluded_resources
            .iter()
            .any(|r| r == "*" || bare_resource(r).eq_ignore_ascii_case(resource))
        {
            return false;
        }
        self.included_resources.is_empty()
            || self
                .included_resources
                .iter()
                .any(|r| r == "*" || bare_resource(r).eq_ignore_ascii_case(resource))
    }

    /// Whether an item in `namespace` passes the filter. Cluster-scoped items ("") always pass.
    pub fn includes_namespace(&self, namespace: &str) -> bool {
        if namespace.is_empty() {
            return true;
        }
        if self
            .excluded_namespaces
            .iter()
            .any(|n| n == "*" || n == namespace)
        {
            return false;
        }
        self.included_namespaces.is_empty()
            || self
                .included_namespaces
                .iter()
                .any(|n| n == "*" || n == namespace)
    }
}

/// `persistentvolumeclaims.core` -> `persistentvolumeclaims`.
fn bare_resource(resource: &str) -> &str {
    resource.split('.').next().unwrap_or(resource)
}

/// Lowercase plural resource name for a kind, for callers without discovery data.
///
/// Covers the regular English plurals Kubernetes kinds use; irregular kinds
/// (e.g. `Endpoints`) should be passed to the selector by resource name directly.
pub fn resource_for_kind(kind: &str) -> String {
    let lower = kind.to_ascii_lowercase();
    if lower.is_empty() {
        return lower;
    }
    if let Some(stem) = lower.strip_suffix('y') {
        if !stem.ends_with(&['a', 'e', 'i', 'o', 'u'][..]) {
            return format!("{stem}ies");
        }
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{lower}es");
    }
    format!("{lower}s")
}
