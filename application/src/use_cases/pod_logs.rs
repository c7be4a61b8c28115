//! `podLogs` command and log retrieval.

use super::handler::CommandHandler;
use crate::ports::cluster::{ClusterConnection, ConnectionHandle};
use async_trait::async_trait;
use kdebug_domain::{DebugError, LogParams, LogQuery, ResourceKind};
use tracing::debug;

/// Fetches the complete log of one pod container.
pub struct LogRetriever;

impl LogRetriever {
    /// Resolve the pod, pick the container (the first declared one when the
    /// query names none), and read its full, non-following log.
    pub async fn fetch(
        connection: &dyn ClusterConnection,
        query: &LogQuery,
    ) -> Result<String, DebugError> {
        let containers = connection
            .pod_containers(&query.namespace, &query.pod)
            .await?;

        let container = match &query.container {
            Some(container) => container.clone(),
            None => containers.into_iter().next().ok_or_else(|| {
                DebugError::invalid_resource(
                    ResourceKind::Pod,
                    &query.pod,
                    "pod declares no containers",
                )
            })?,
        };

        debug!(
            namespace = %query.namespace,
            pod = %query.pod,
            container = %container,
            "Fetching pod logs"
        );
        connection
            .pod_logs(&query.namespace, &query.pod, &container)
            .await
    }
}

pub struct PodLogsHandler;

#[async_trait]
impl CommandHandler for PodLogsHandler {
    type Params = LogParams;

    async fn handle(
        &self,
        connection: ConnectionHandle,
        params: LogParams,
    ) -> Result<String, DebugError> {
        LogRetriever::fetch(connection.as_ref(), &params.query()).await
    }
}
