//! Cluster connection ports
//!
//! The application layer reaches the control plane only through these traits.
//! The infrastructure layer implements them with `kube`; tests use mocks.

use async_trait::async_trait;
use kdebug_domain::{DebugError, ProjectedTable, ResourceKind, ResourceQuery};
use std::sync::Arc;

/// An authenticated client bound to one kubeconfig context.
#[async_trait]
pub trait ClusterConnection: Send + Sync {
    /// Name of the context this connection was built for.
    fn context(&self) -> &str;

    /// List `kind` within `query` and project every item into a row.
    ///
    /// Rows come back in control-plane order. Any failure fails the whole
    /// call; there is no partial table.
    async fn list(
        &self,
        kind: ResourceKind,
        query: &ResourceQuery,
    ) -> Result<ProjectedTable, DebugError>;

    /// Names of the containers declared in a pod's spec, in declaration order.
    ///
    /// Returns [`DebugError::ResourceNotFound`] when the pod does not exist.
    async fn pod_containers(&self, namespace: &str, pod: &str) -> Result<Vec<String>, DebugError>;

    /// Complete, non-following log output of one container.
    async fn pod_logs(
        &self,
        namespace: &str,
        pod: &str,
        container: &str,
    ) -> Result<String, DebugError>;
}

/// Shared handle to the active connection.
///
/// Invocations clone the handle once and keep it for their whole duration, so
/// a context switch never affects requests already in flight.
pub type ConnectionHandle = Arc<dyn ClusterConnection>;

/// Builds connections from kubeconfig contexts.
#[async_trait]
pub trait ConnectionResolver: Send + Sync {
    /// Resolve `context` (or the kubeconfig's current context when `None`)
    /// into a fresh connection.
    ///
    /// Fails with [`DebugError::ContextResolution`]. Does not query any
    /// resource.
    async fn resolve(&self, context: Option<&str>) -> Result<ConnectionHandle, DebugError>;
}
