//! Hand-written port mocks shared by the unit tests.

use crate::ports::cluster::{ClusterConnection, ConnectionHandle, ConnectionResolver};
use async_trait::async_trait;
use kdebug_domain::{
    DebugError, ProjectedTable, ResourceKind, ResourceQuery, ResourceRow,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub struct MockPod {
    pub namespace: String,
    pub name: String,
    pub containers: Vec<String>,
}

/// In-memory cluster: canned rows per kind, pods with containers, and logs
/// keyed by container name.
#[derive(Default)]
pub struct MockConnection {
    pub context: String,
    pub rows: HashMap<ResourceKind, Vec<ResourceRow>>,
    pub pods: Vec<MockPod>,
    pub logs: HashMap<String, String>,
    pub list_error: Option<String>,
    pub delay: Option<Duration>,
    pub list_calls: Mutex<Vec<(ResourceKind, ResourceQuery)>>,
    pub log_calls: Mutex<Vec<(String, String, String)>>,
}

impl MockConnection {
    pub fn new(context: &str) -> Self {
        Self {
            context: context.to_string(),
            ..Default::default()
        }
    }

    pub fn with_rows(mut self, kind: ResourceKind, rows: Vec<ResourceRow>) -> Self {
        self.rows.insert(kind, rows);
        self
    }

    pub fn with_pod(mut self, namespace: &str, name: &str, containers: &[&str]) -> Self {
        self.pods.push(MockPod {
            namespace: namespace.to_string(),
            name: name.to_string(),
            containers: containers.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn with_log(mut self, container: &str, text: &str) -> Self {
        self.logs.insert(container.to_string(), text.to_string());
        self
    }

    pub fn failing(mut self, cause: &str) -> Self {
        self.list_error = Some(cause.to_string());
        self
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn list_calls(&self) -> Vec<(ResourceKind, ResourceQuery)> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn log_calls(&self) -> Vec<(String, String, String)> {
        self.log_calls.lock().unwrap().clone()
    }

    fn find_pod(&self, namespace: &str, name: &str) -> Option<&MockPod> {
        self.pods
            .iter()
            .find(|p| p.namespace == namespace && p.name == name)
    }
}

#[async_trait]
impl ClusterConnection for MockConnection {
    fn context(&self) -> &str {
        &self.context
    }

    async fn list(
        &self,
        kind: ResourceKind,
        query: &ResourceQuery,
    ) -> Result<ProjectedTable, DebugError> {
        self.list_calls.lock().unwrap().push((kind, query.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(cause) = &self.list_error {
            return Err(DebugError::query_failed(kind, cause));
        }

        let mut table = ProjectedTable::new(kind);
        let name_column = table.column("NAME");
        for row in self.rows.get(&kind).into_iter().flatten() {
            let matches = match (&query.exact_name, name_column) {
                (Some(name), Some(col)) => row.get(col) == Some(name.as_str()),
                _ => true,
            };
            if matches {
                table.push(row.clone());
            }
        }
        Ok(table)
    }

    async fn pod_containers(&self, namespace: &str, pod: &str) -> Result<Vec<String>, DebugError> {
        self.find_pod(namespace, pod)
            .map(|p| p.containers.clone())
            .ok_or_else(|| DebugError::ResourceNotFound {
                kind: ResourceKind::Pod,
                namespace: namespace.to_string(),
                name: pod.to_string(),
            })
    }

    async fn pod_logs(
        &self,
        namespace: &str,
        pod: &str,
        container: &str,
    ) -> Result<String, DebugError> {
        self.log_calls.lock().unwrap().push((
            namespace.to_string(),
            pod.to_string(),
            container.to_string(),
        ));
        self.logs
            .get(container)
            .cloned()
            .ok_or_else(|| DebugError::log_stream(pod, format!("container {container} not found")))
    }
}

/// Resolver that knows a fixed set of contexts.
pub struct MockResolver {
    pub current: String,
    pub known: Vec<String>,
    pub resolved: Mutex<Vec<String>>,
}

impl MockResolver {
    pub fn new(current: &str, known: &[&str]) -> Self {
        Self {
            current: current.to_string(),
            known: known.iter().map(|c| c.to_string()).collect(),
            resolved: Mutex::new(Vec::new()),
        }
    }

    pub fn resolved(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConnectionResolver for MockResolver {
    async fn resolve(&self, context: Option<&str>) -> Result<ConnectionHandle, DebugError> {
        let context = context.unwrap_or(&self.current).to_string();
        self.resolved.lock().unwrap().push(context.clone());
        if !self.known.contains(&context) {
            return Err(DebugError::context_resolution(
                &context,
                "context not found in kubeconfig",
            ));
        }
        Ok(Arc::new(MockConnection::new(&context)))
    }
}

pub fn row(cells: &[&str]) -> ResourceRow {
    cells.iter().copied().collect()
}
