//! Tool Registry
//!
//! The [`ToolRegistry`] binds each command name to its definition and handler.
//! Registration order is kept: it is the order hosts see in listings.
//!
//! # Usage
//!
//! ```ignore
//! let registry = ToolRegistry::builtin(state, renderer);
//!
//! assert!(registry.lookup("podLogs").is_ok());
//! let names: Vec<_> = registry.definitions().map(|d| d.name.as_str()).collect();
//! ```

use crate::connection::ConnectionState;
use crate::ports::table_renderer::TableRenderer;
use crate::use_cases::handler::HandlerBinding;
use crate::use_cases::list_resources::ListResourcesHandler;
use crate::use_cases::pod_logs::PodLogsHandler;
use crate::use_cases::switch_context::SwitchContextHandler;
use kdebug_domain::{CommandDefinition, CommandId, DebugError};
use std::collections::HashMap;
use std::sync::Arc;

/// A definition together with the handler that implements it.
pub struct RegisteredCommand {
    definition: CommandDefinition,
    handler: Arc<dyn HandlerBinding>,
}

impl RegisteredCommand {
    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    pub fn handler(&self) -> &Arc<dyn HandlerBinding> {
        &self.handler
    }
}

#[derive(Default)]
pub struct ToolRegistry {
    commands: Vec<RegisteredCommand>,
    /// Command name -> index into `commands`
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full read-only debugging catalog, in catalog order.
    pub fn builtin(state: Arc<ConnectionState>, renderer: Arc<dyn TableRenderer>) -> Self {
        CommandId::ALL
            .into_iter()
            .fold(Self::new(), |registry, id| {
                let handler: Arc<dyn HandlerBinding> = match (id, id.resource_kind()) {
                    (_, Some(kind)) => Arc::new(ListResourcesHandler::new(kind, renderer.clone())),
                    (CommandId::Context, None) => {
                        Arc::new(SwitchContextHandler::new(state.clone()))
                    }
                    (_, None) => Arc::new(PodLogsHandler),
                };
                registry.register_arc(id.definition(), handler)
            })
    }

    /// Register a command.
    ///
    /// # Panics
    ///
    /// If a command with the same name is already registered.
    pub fn register<H: HandlerBinding + 'static>(
        self,
        definition: CommandDefinition,
        handler: H,
    ) -> Self {
        self.register_arc(definition, Arc::new(handler))
    }

    /// Register a command (Arc version)
    pub fn register_arc(
        mut self,
        definition: CommandDefinition,
        handler: Arc<dyn HandlerBinding>,
    ) -> Self {
        assert!(
            !self.index.contains_key(&definition.name),
            "command '{}' registered twice",
            definition.name
        );
        tracing::trace!(command = %definition.name, "Registered command");
        self.index
            .insert(definition.name.clone(), self.commands.len());
        self.commands.push(RegisteredCommand {
            definition,
            handler,
        });
        self
    }

    pub fn lookup(&self, name: &str) -> Result<&RegisteredCommand, DebugError> {
        self.index
            .get(name)
            .map(|&i| &self.commands[i])
            .ok_or_else(|| DebugError::UnknownCommand(name.to_string()))
    }

    /// Definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.commands.iter().map(|c| &c.definition)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockResolver;
    use crate::use_cases::handler::CommandHandler;
    use crate::ports::cluster::ConnectionHandle;
    use async_trait::async_trait;
    use kdebug_domain::{NoParams, ProjectedTable};

    struct EchoHandler;

    #[async_trait]
    impl CommandHandler for EchoHandler {
        type Params = NoParams;

        async fn handle(
            &self,
            _connection: ConnectionHandle,
            _params: NoParams,
        ) -> Result<String, DebugError> {
            Ok("echo".to_string())
        }
    }

    struct NullRenderer;

    impl TableRenderer for NullRenderer {
        fn render(&self, _table: &ProjectedTable) -> String {
            String::new()
        }
    }

    async fn builtin() -> ToolRegistry {
        let resolver = Arc::new(MockResolver::new("kind-dev", &["kind-dev"]));
        let state = Arc::new(ConnectionState::connect(resolver, None).await.unwrap());
        ToolRegistry::builtin(state, Arc::new(NullRenderer))
    }

    #[tokio::test]
    async fn test_builtin_catalog_order() {
        let registry = builtin().await;
        let names: Vec<_> = registry.definitions().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "context",
                "nodes",
                "pods",
                "podLogs",
                "services",
                "deployments",
                "statefulsets",
                "replicasets",
                "daemonsets",
                "events",
            ]
        );
    }

    #[tokio::test]
    async fn test_lookup_unknown() {
        let registry = builtin().await;
        assert!(registry.lookup("pods").is_ok());
        assert_eq!(
            registry.lookup("secrets").err(),
            Some(DebugError::UnknownCommand("secrets".to_string()))
        );
    }

    #[test]
    fn test_register_preserves_order() {
        let registry = ToolRegistry::new()
            .register(CommandDefinition::new("b", "second letter"), EchoHandler)
            .register(CommandDefinition::new("a", "first letter"), EchoHandler);
        let names: Vec<_> = registry.definitions().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_registration_panics() {
        let _ = ToolRegistry::new()
            .register(CommandDefinition::new("pods", "one"), EchoHandler)
            .register(CommandDefinition::new("pods", "two"), EchoHandler);
    }
}
