//! The inspectable resource kinds and their fixed table layouts.

use serde::{Deserialize, Serialize};

/// One of the eight object categories a projector can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Node,
    Pod,
    Service,
    Deployment,
    StatefulSet,
    ReplicaSet,
    DaemonSet,
    Event,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Node,
        ResourceKind::Pod,
        ResourceKind::Service,
        ResourceKind::Deployment,
        ResourceKind::StatefulSet,
        ResourceKind::ReplicaSet,
        ResourceKind::DaemonSet,
        ResourceKind::Event,
    ];

    /// Exact column headers of this kind's table, in display order.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Node => &["NAME", "STATUS", "ROLES", "AGE", "VERSION"],
            ResourceKind::Pod => &[
                "NAMESPACE", "NAME", "READY", "STATUS", "RESTARTS", "AGE", "NODE",
            ],
            ResourceKind::Service => &["NAMESPACE", "NAME", "TYPE", "CLUSTER-IP", "PORTS", "AGE"],
            ResourceKind::Deployment => &[
                "NAMESPACE",
                "NAME",
                "READY",
                "UP-TO-DATE",
                "AVAILABLE",
                "AGE",
            ],
            ResourceKind::StatefulSet => &["NAMESPACE", "NAME", "READY", "AGE"],
            ResourceKind::ReplicaSet => &["NAMESPACE", "NAME", "DESIRED", "CURRENT", "READY", "AGE"],
            ResourceKind::DaemonSet => &[
                "NAMESPACE",
                "NAME",
                "DESIRED",
                "CURRENT",
                "READY",
                "UP-TO-DATE",
                "AVAILABLE",
                "NODE SELECTOR",
                "AGE",
            ],
            ResourceKind::Event => &[
                "NAMESPACE", "TYPE", "REASON", "OBJECT", "AGE", "FROM", "MESSAGE",
            ],
        }
    }

    /// Number of columns in this kind's table.
    pub fn column_count(&self) -> usize {
        self.headers().len()
    }

    /// Whether the kind lives inside a namespace. Nodes are cluster-scoped.
    pub fn is_namespaced(&self) -> bool {
        !matches!(self, ResourceKind::Node)
    }

    /// Field the exact-name filter is applied to.
    ///
    /// Events are filtered by the object they describe, not by their own name.
    pub fn name_field(&self) -> &'static str {
        match self {
            ResourceKind::Event => "involvedObject.name",
            _ => "metadata.name",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Node => "node",
            ResourceKind::Pod => "pod",
            ResourceKind::Service => "service",
            ResourceKind::Deployment => "deployment",
            ResourceKind::StatefulSet => "stateful set",
            ResourceKind::ReplicaSet => "replica set",
            ResourceKind::DaemonSet => "daemon set",
            ResourceKind::Event => "event",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Node => "nodes",
            ResourceKind::Pod => "pods",
            ResourceKind::Service => "services",
            ResourceKind::Deployment => "deployments",
            ResourceKind::StatefulSet => "stateful sets",
            ResourceKind::ReplicaSet => "replica sets",
            ResourceKind::DaemonSet => "daemon sets",
            ResourceKind::Event => "events",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plural())
    }
}
