//! MCP server handler.
//!
//! Bridges MCP `tools/list` and `tools/call` onto the [`Dispatcher`]. Command
//! failures come back as tool results flagged as errors so the assistant can
//! read them. Cancelled calls surface as protocol errors.

use super::schema::input_schema;
use kdebug_application::Dispatcher;
use kdebug_domain::InvocationArguments;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_INSTRUCTIONS: &str = "Read-only Kubernetes debugging tools. \
Before inspecting anything, ask the user which context to use and switch to it \
with the `context` tool. Listing tools default to the `default` namespace.";

#[derive(Clone)]
pub struct KdebugServer {
    dispatcher: Arc<Dispatcher>,
    instructions: String,
}

impl KdebugServer {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Tool descriptors in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .registry()
            .definitions()
            .map(|definition| {
                Tool::new(
                    definition.name.clone(),
                    definition.description.clone(),
                    Arc::new(input_schema(definition)),
                )
            })
            .collect()
    }

    /// Run one tool call through the dispatcher.
    pub async fn run_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        cancel: &CancellationToken,
    ) -> Result<CallToolResult, McpError> {
        let arguments = arguments.map(InvocationArguments::from).unwrap_or_default();
        debug!(tool = name, "MCP tool call");

        match self
            .dispatcher
            .invoke_cancellable(name, arguments, cancel)
            .await
        {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) if e.is_cancelled() => Err(McpError::internal_error(e.to_string(), None)),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        }
    }
}

impl ServerHandler for KdebugServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions.clone()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                meta: None,
                next_cursor: None,
                tools: self.tools(),
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            self.run_tool(&request.name, request.arguments, &context.ct)
                .await
        }
    }
}
