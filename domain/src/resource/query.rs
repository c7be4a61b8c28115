//! Selection queries handed to a cluster connection.

use super::kind::ResourceKind;
use serde::{Deserialize, Serialize};

/// Namespace used when a caller leaves the namespace empty.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Scope and optional exact-name filter for one list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuery {
    pub namespace: String,
    pub exact_name: Option<String>,
}

impl ResourceQuery {
    /// Build a query from raw parameter values.
    ///
    /// An empty namespace becomes [`DEFAULT_NAMESPACE`]; an empty name means
    /// no filter.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        Self {
            namespace: if namespace.is_empty() {
                DEFAULT_NAMESPACE.to_string()
            } else {
                namespace
            },
            exact_name: if name.is_empty() { None } else { Some(name) },
        }
    }

    /// Query across the default namespace with no name filter.
    pub fn all() -> Self {
        Self::new("", "")
    }

    /// Server-side field selector for `kind`, if a name filter is set.
    pub fn field_selector(&self, kind: ResourceKind) -> Option<String> {
        self.exact_name
            .as_ref()
            .map(|name| format!("{}={}", kind.name_field(), name))
    }
}

/// Target of a log retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQuery {
    pub namespace: String,
    pub pod: String,
    /// `None` selects the first container declared in the pod spec.
    pub container: Option<String>,
}

impl LogQuery {
    pub fn new(
        namespace: impl Into<String>,
        pod: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        let namespace = namespace.into();
        let container = container.into();
        Self {
            namespace: if namespace.is_empty() {
                DEFAULT_NAMESPACE.to_string()
            } else {
                namespace
            },
            pod: pod.into(),
            container: if container.is_empty() {
                None
            } else {
                Some(container)
            },
        }
    }
}
