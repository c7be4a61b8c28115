//! Kubeconfig-backed [`ConnectionResolver`].

use super::connection::KubeConnection;
use async_trait::async_trait;
use kdebug_application::ports::cluster::{ConnectionHandle, ConnectionResolver};
use kdebug_domain::DebugError;
use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::{Client, Config};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Label used in errors when no context was named.
const CURRENT_CONTEXT: &str = "<current>";

/// Builds connections from a kubeconfig.
///
/// The kubeconfig is re-read on every resolution, so contexts added after
/// startup can be switched to.
pub struct KubeConnectionResolver {
    /// Explicit kubeconfig; `None` uses `KUBECONFIG` or `~/.kube/config`.
    kubeconfig: Option<PathBuf>,
}

impl KubeConnectionResolver {
    pub fn new(kubeconfig: Option<PathBuf>) -> Self {
        Self { kubeconfig }
    }

    fn read_kubeconfig(&self) -> Result<Kubeconfig, KubeconfigError> {
        match &self.kubeconfig {
            Some(path) => Kubeconfig::read_from(path),
            None => Kubeconfig::read(),
        }
    }

    /// Names of all contexts in the kubeconfig.
    pub fn contexts(&self) -> Result<Vec<String>, DebugError> {
        let kubeconfig = self
            .read_kubeconfig()
            .map_err(|e| DebugError::context_resolution(CURRENT_CONTEXT, e))?;
        Ok(kubeconfig.contexts.into_iter().map(|c| c.name).collect())
    }
}

#[async_trait]
impl ConnectionResolver for KubeConnectionResolver {
    async fn resolve(&self, context: Option<&str>) -> Result<ConnectionHandle, DebugError> {
        let label = context.unwrap_or(CURRENT_CONTEXT);
        let kubeconfig = self
            .read_kubeconfig()
            .map_err(|e| DebugError::context_resolution(label, e))?;

        let name = match context {
            Some(name) => name.to_string(),
            None => kubeconfig.current_context.clone().ok_or_else(|| {
                DebugError::context_resolution(label, "kubeconfig has no current context")
            })?,
        };
        if !kubeconfig.contexts.iter().any(|c| c.name == name) {
            return Err(DebugError::context_resolution(
                &name,
                "context not found in kubeconfig",
            ));
        }

        let options = KubeConfigOptions {
            context: Some(name.clone()),
            ..Default::default()
        };
        let config = Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|e| DebugError::context_resolution(&name, e))?;
        debug!(context = %name, cluster_url = %config.cluster_url, "Resolved kubeconfig context");

        let client = Client::try_from(config).map_err(|e| DebugError::context_resolution(&name, e))?;
        Ok(Arc::new(KubeConnection::new(client, name)))
    }
}
