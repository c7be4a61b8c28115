//! Listing commands (`nodes`, `pods`, `services`, ...).

use super::handler::CommandHandler;
use crate::ports::cluster::ConnectionHandle;
use crate::ports::table_renderer::TableRenderer;
use async_trait::async_trait;
use kdebug_domain::{DebugError, ListParams, ResourceKind};
use std::sync::Arc;
use tracing::debug;

/// Lists one resource kind and renders the projected table.
pub struct ListResourcesHandler {
    kind: ResourceKind,
    renderer: Arc<dyn TableRenderer>,
}

impl ListResourcesHandler {
    pub fn new(kind: ResourceKind, renderer: Arc<dyn TableRenderer>) -> Self {
        Self { kind, renderer }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

#[async_trait]
impl CommandHandler for ListResourcesHandler {
    type Params = ListParams;

    async fn handle(
        &self,
        connection: ConnectionHandle,
        params: ListParams,
    ) -> Result<String, DebugError> {
        let query = params.query();
        let table = connection.list(self.kind, &query).await?;
        debug!(
            kind = %self.kind,
            namespace = %query.namespace,
            rows = table.rows().len(),
            "Projected resources"
        );
        Ok(self.renderer.render(&table))
    }
}
