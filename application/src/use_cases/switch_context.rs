//! `context` command.

use super::handler::CommandHandler;
use crate::connection::ConnectionState;
use crate::ports::cluster::ConnectionHandle;
use async_trait::async_trait;
use kdebug_domain::{ContextParams, DebugError};
use std::sync::Arc;

/// Switches the context used by every following invocation.
pub struct SwitchContextHandler {
    state: Arc<ConnectionState>,
}

impl SwitchContextHandler {
    pub fn new(state: Arc<ConnectionState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CommandHandler for SwitchContextHandler {
    type Params = ContextParams;

    async fn handle(
        &self,
        _connection: ConnectionHandle,
        params: ContextParams,
    ) -> Result<String, DebugError> {
        let context = self.state.switch_to(&params.context).await?;
        Ok(format!("KDebug will use {context}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockResolver;

    #[tokio::test]
    async fn test_switch_reply_names_context() {
        let resolver = Arc::new(MockResolver::new("kind-dev", &["kind-dev", "staging"]));
        let state = Arc::new(ConnectionState::connect(resolver, None).await.unwrap());
        let handler = SwitchContextHandler::new(state.clone());

        let reply = handler
            .handle(
                state.current(),
                ContextParams {
                    context: "staging".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(reply, "KDebug will use staging");
        assert_eq!(state.current_context(), "staging");
    }
}
