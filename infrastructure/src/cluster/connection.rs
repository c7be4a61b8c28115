//! `kube`-backed [`ClusterConnection`].

use super::projection::{
    DaemonSetProjector, DeploymentProjector, EventProjector, NodeProjector, PodProjector,
    Projector, ReplicaSetProjector, ServiceProjector, StatefulSetProjector, project_all,
};
use async_trait::async_trait;
use chrono::Utc;
use futures::AsyncReadExt;
use k8s_openapi::NamespaceResourceScope;
use k8s_openapi::api::core::v1::Pod;
use kdebug_application::ports::cluster::ClusterConnection;
use kdebug_domain::{DebugError, ProjectedTable, ResourceKind, ResourceQuery};
use kube::api::{Api, ListParams, LogParams};
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

/// A client bound to one kubeconfig context.
pub struct KubeConnection {
    client: Client,
    context: String,
}

impl KubeConnection {
    pub fn new(client: Client, context: impl Into<String>) -> Self {
        Self {
            client,
            context: context.into(),
        }
    }

    fn namespaced<K>(&self, query: &ResourceQuery) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        K::DynamicType: Default,
    {
        Api::namespaced(self.client.clone(), &query.namespace)
    }

    /// List through `api` and project with `P`.
    ///
    /// The name filter is applied server-side as a field selector.
    async fn list_with<K, P>(
        &self,
        api: Api<K>,
        query: &ResourceQuery,
    ) -> Result<ProjectedTable, DebugError>
    where
        K: Resource + Clone + DeserializeOwned + Debug,
        P: Projector<K>,
    {
        let mut params = ListParams::default();
        if let Some(selector) = query.field_selector(P::KIND) {
            params = params.fields(&selector);
        }

        debug!(
            context = %self.context,
            kind = %P::KIND,
            namespace = %query.namespace,
            field_selector = ?params.field_selector,
            "Listing resources"
        );
        let list = api
            .list(&params)
            .await
            .map_err(|e| DebugError::query_failed(P::KIND, e))?;

        project_all::<K, P>(&list.items, Utc::now())
    }
}

#[async_trait]
impl ClusterConnection for KubeConnection {
    fn context(&self) -> &str {
        &self.context
    }

    async fn list(
        &self,
        kind: ResourceKind,
        query: &ResourceQuery,
    ) -> Result<ProjectedTable, DebugError> {
        match kind {
            ResourceKind::Node => {
                self.list_with::<_, NodeProjector>(Api::all(self.client.clone()), query)
                    .await
            }
            ResourceKind::Pod => {
                self.list_with::<_, PodProjector>(self.namespaced(query), query)
                    .await
            }
            ResourceKind::Service => {
                self.list_with::<_, ServiceProjector>(self.namespaced(query), query)
                    .await
            }
            ResourceKind::Deployment => {
                self.list_with::<_, DeploymentProjector>(self.namespaced(query), query)
                    .await
            }
            ResourceKind::StatefulSet => {
                self.list_with::<_, StatefulSetProjector>(self.namespaced(query), query)
                    .await
            }
            ResourceKind::ReplicaSet => {
                self.list_with::<_, ReplicaSetProjector>(self.namespaced(query), query)
                    .await
            }
            ResourceKind::DaemonSet => {
                self.list_with::<_, DaemonSetProjector>(self.namespaced(query), query)
                    .await
            }
            ResourceKind::Event => {
                self.list_with::<_, EventProjector>(self.namespaced(query), query)
                    .await
            }
        }
    }

    async fn pod_containers(&self, namespace: &str, pod: &str) -> Result<Vec<String>, DebugError> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let found = api
            .get_opt(pod)
            .await
            .map_err(|e| DebugError::query_failed(ResourceKind::Pod, e))?
            .ok_or_else(|| DebugError::ResourceNotFound {
                kind: ResourceKind::Pod,
                namespace: namespace.to_string(),
                name: pod.to_string(),
            })?;

        Ok(found
            .spec
            .map(|spec| spec.containers.into_iter().map(|c| c.name).collect())
            .unwrap_or_default())
    }

    async fn pod_logs(
        &self,
        namespace: &str,
        pod: &str,
        container: &str,
    ) -> Result<String, DebugError> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let params = LogParams {
            container: Some(container.to_string()),
            follow: false,
            ..Default::default()
        };

        // Read raw bytes: a log is not guaranteed to be valid UTF-8.
        let stream = api
            .log_stream(pod, &params)
            .await
            .map_err(|e| DebugError::log_stream(pod, e))?;
        let mut stream = std::pin::pin!(stream);
        let mut raw = Vec::new();
        stream
            .read_to_end(&mut raw)
            .await
            .map_err(|e| DebugError::log_stream(pod, e))?;

        debug!(pod, container, bytes = raw.len(), "Fetched pod logs");
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}
