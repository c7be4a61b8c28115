//! The closed set of commands and their catalog entries.

use super::entities::{CommandDefinition, ParameterSpec};
use crate::resource::{DEFAULT_NAMESPACE, ResourceKind};
use serde::{Deserialize, Serialize};

/// Identifier of a built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandId {
    Context,
    Nodes,
    Pods,
    PodLogs,
    Services,
    Deployments,
    StatefulSets,
    ReplicaSets,
    DaemonSets,
    Events,
}

impl CommandId {
    /// All commands in catalog order.
    pub const ALL: [CommandId; 10] = [
        CommandId::Context,
        CommandId::Nodes,
        CommandId::Pods,
        CommandId::PodLogs,
        CommandId::Services,
        CommandId::Deployments,
        CommandId::StatefulSets,
        CommandId::ReplicaSets,
        CommandId::DaemonSets,
        CommandId::Events,
    ];

    /// Wire name hosts use to invoke the command.
    pub fn name(&self) -> &'static str {
        match self {
            CommandId::Context => "context",
            CommandId::Nodes => "nodes",
            CommandId::Pods => "pods",
            CommandId::PodLogs => "podLogs",
            CommandId::Services => "services",
            CommandId::Deployments => "deployments",
            CommandId::StatefulSets => "statefulsets",
            CommandId::ReplicaSets => "replicasets",
            CommandId::DaemonSets => "daemonsets",
            CommandId::Events => "events",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Kind listed by this command, for the listing commands.
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        match self {
            CommandId::Context | CommandId::PodLogs => None,
            CommandId::Nodes => Some(ResourceKind::Node),
            CommandId::Pods => Some(ResourceKind::Pod),
            CommandId::Services => Some(ResourceKind::Service),
            CommandId::Deployments => Some(ResourceKind::Deployment),
            CommandId::StatefulSets => Some(ResourceKind::StatefulSet),
            CommandId::ReplicaSets => Some(ResourceKind::ReplicaSet),
            CommandId::DaemonSets => Some(ResourceKind::DaemonSet),
            CommandId::Events => Some(ResourceKind::Event),
        }
    }

    /// Catalog entry for this command.
    pub fn definition(&self) -> CommandDefinition {
        match self {
            CommandId::Context => CommandDefinition::new(
                self.name(),
                "Switch the Kubernetes context used by every following command. \
                 Ask the user which context to use before debugging.",
            )
            .with_parameter(ParameterSpec::required(
                "context",
                "Name of the kubeconfig context to switch to",
            )),
            CommandId::Nodes => CommandDefinition::new(
                self.name(),
                "List the nodes of the cluster with their status, roles, age and kubelet version.",
            ),
            CommandId::PodLogs => CommandDefinition::new(
                self.name(),
                "Get the logs of a specific pod by name. Defaults to the first container \
                 declared in the pod spec.",
            )
            .with_parameter(namespace_parameter("pods"))
            .with_parameter(ParameterSpec::required("name", "Name of the pod"))
            .with_parameter(ParameterSpec::optional(
                "container",
                "Container to read logs from (defaults to the first declared container)",
                "",
            )),
            CommandId::Events => CommandDefinition::new(
                self.name(),
                "List events in a namespace, or only the events about a specific object.",
            )
            .with_parameter(namespace_parameter("events"))
            .with_parameter(ParameterSpec::optional(
                "name",
                "Name of the object the events refer to",
                "",
            )),
            CommandId::Pods => listing_definition(*self, ResourceKind::Pod),
            CommandId::Services => listing_definition(*self, ResourceKind::Service),
            CommandId::Deployments => listing_definition(*self, ResourceKind::Deployment),
            CommandId::StatefulSets => listing_definition(*self, ResourceKind::StatefulSet),
            CommandId::ReplicaSets => listing_definition(*self, ResourceKind::ReplicaSet),
            CommandId::DaemonSets => listing_definition(*self, ResourceKind::DaemonSet),
        }
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn listing_definition(id: CommandId, kind: ResourceKind) -> CommandDefinition {
    CommandDefinition::new(
        id.name(),
        format!(
            "List {} in a namespace, or get a specific one by name.",
            kind.plural()
        ),
    )
    .with_parameter(namespace_parameter(kind.plural()))
    .with_parameter(ParameterSpec::optional(
        "name",
        format!("Name of the {}", kind.singular()),
        "",
    ))
}

fn namespace_parameter(subject: &str) -> ParameterSpec {
    ParameterSpec::optional(
        "namespace",
        format!("Namespace of the {subject}"),
        DEFAULT_NAMESPACE,
    )
}
