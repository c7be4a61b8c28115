//! The active cluster connection.
//!
//! [`ConnectionState`] owns exactly one [`ConnectionHandle`] at a time. Readers
//! clone it out of a short read lock; a context switch resolves the new
//! connection with no lock on the handle held, then swaps it in.

use crate::ports::cluster::{ConnectionHandle, ConnectionResolver};
use kdebug_domain::DebugError;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct ConnectionState {
    current: RwLock<ConnectionHandle>,
    resolver: Arc<dyn ConnectionResolver>,
    /// Serializes switches against each other.
    switching: Mutex<()>,
}

impl ConnectionState {
    pub fn new(resolver: Arc<dyn ConnectionResolver>, initial: ConnectionHandle) -> Self {
        Self {
            current: RwLock::new(initial),
            resolver,
            switching: Mutex::new(()),
        }
    }

    /// Build the startup connection for `context`, or for the kubeconfig's
    /// current context when `None`.
    pub async fn connect(
        resolver: Arc<dyn ConnectionResolver>,
        context: Option<&str>,
    ) -> Result<Self, DebugError> {
        let initial = resolver.resolve(context).await?;
        info!(context = initial.context(), "Connected to cluster");
        Ok(Self::new(resolver, initial))
    }

    /// Handle for one invocation.
    pub fn current(&self) -> ConnectionHandle {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current_context(&self) -> String {
        self.current().context().to_string()
    }

    /// Replace the active connection with one bound to `context`.
    ///
    /// On failure the previous connection stays active. Returns the name of
    /// the context now in use.
    pub async fn switch_to(&self, context: &str) -> Result<String, DebugError> {
        let _guard = self.switching.lock().await;
        debug!(context, "Resolving context");

        let next = match self.resolver.resolve(Some(context)).await {
            Ok(next) => next,
            Err(e) => {
                warn!(context, error = %e, "Context switch failed, keeping current connection");
                return Err(e);
            }
        };

        let name = next.context().to_string();
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
        info!(context = %name, "Switched cluster context");
        Ok(name)
    }
}
