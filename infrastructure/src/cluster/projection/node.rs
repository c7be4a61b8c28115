use super::{Projector, age, name};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Node;
use kdebug_domain::{DebugError, ResourceKind, ResourceRow};

const WORKER_LABEL: &str = "node-role.kubernetes.io/worker";

pub struct NodeProjector;

impl Projector<Node> for NodeProjector {
    const KIND: ResourceKind = ResourceKind::Node;

    fn project(node: &Node, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let version = node
            .status
            .as_ref()
            .and_then(|s| s.node_info.as_ref())
            .map(|info| info.kubelet_version.clone())
            .unwrap_or_default();

        Ok(ResourceRow::new(vec![
            name(&node.metadata),
            status(node),
            role(node).to_string(),
            age(&node.metadata, now),
            version,
        ]))
    }
}

/// Any taint marks a control-plane node; the worker label is only consulted
/// for untainted nodes.
fn role(node: &Node) -> &'static str {
    let tainted = node
        .spec
        .as_ref()
        .and_then(|s| s.taints.as_ref())
        .is_some_and(|t| !t.is_empty());
    let worker = node
        .metadata
        .labels
        .as_ref()
        .is_some_and(|l| l.contains_key(WORKER_LABEL));

    if tainted {
        "control-plane"
    } else if worker {
        "worker"
    } else {
        "none"
    }
}

fn status(node: &Node) -> String {
    node.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .and_then(|conditions| {
            conditions
                .iter()
                .find(|c| c.type_ == "Ready" && c.status != "True")
        })
        .map(|c| c.reason.clone().unwrap_or_default())
        .unwrap_or_else(|| "Ready".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::projection::fixtures::{meta, now};
    use chrono::TimeDelta;
    use k8s_openapi::api::core::v1::{NodeCondition, NodeSpec, NodeStatus, NodeSystemInfo, Taint};
    use std::collections::BTreeMap;

    fn node(taints: Vec<Taint>, labels: &[&str], conditions: Vec<NodeCondition>) -> Node {
        let mut metadata = meta(None, "node-a", TimeDelta::seconds(26 * 3600 + 4));
        metadata.labels = Some(
            labels
                .iter()
                .map(|l| (l.to_string(), String::new()))
                .collect::<BTreeMap<_, _>>(),
        );
        Node {
            metadata,
            spec: Some(NodeSpec {
                taints: Some(taints),
                ..Default::default()
            }),
            status: Some(NodeStatus {
                conditions: Some(conditions),
                node_info: Some(NodeSystemInfo {
                    kubelet_version: "v1.30.2".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }
    }

    fn taint() -> Taint {
        Taint {
            key: "node-role.kubernetes.io/control-plane".to_string(),
            effect: "NoSchedule".to_string(),
            ..Default::default()
        }
    }

    fn condition(type_: &str, status: &str, reason: &str) -> NodeCondition {
        NodeCondition {
            type_: type_.to_string(),
            status: status.to_string(),
            reason: Some(reason.to_string()),
            ..Default::default()
        }
    }

    fn cells(node: &Node) -> Vec<String> {
        NodeProjector::project(node, now()).unwrap().cells().to_vec()
    }

    #[test]
    fn test_ready_worker() {
        let n = node(
            vec![],
            &[WORKER_LABEL],
            vec![condition("Ready", "True", "KubeletReady")],
        );
        assert_eq!(cells(&n), vec!["node-a", "Ready", "worker", "26h0m4s", "v1.30.2"]);
    }

    #[test]
    fn test_any_taint_means_control_plane() {
        let n = node(vec![taint()], &[WORKER_LABEL], vec![]);
        assert_eq!(cells(&n)[2], "control-plane");
    }

    #[test]
    fn test_no_taint_no_label_is_none() {
        let n = node(vec![], &[], vec![]);
        assert_eq!(cells(&n)[2], "none");
    }

    #[test]
    fn test_not_ready_reports_reason() {
        let n = node(
            vec![],
            &[],
            vec![
                condition("MemoryPressure", "False", "KubeletHasSufficientMemory"),
                condition("Ready", "Unknown", "NodeStatusUnknown"),
            ],
        );
        assert_eq!(cells(&n)[1], "NodeStatusUnknown");
    }
}
