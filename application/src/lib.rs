//! Application layer for kdebug
//!
//! This crate contains the ports, the active-connection state, the command
//! handlers, the registry and the dispatcher. It depends only on the domain
//! layer.

pub mod connection;
pub mod ports;
pub mod registry;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use connection::ConnectionState;
pub use ports::{
    cluster::{ClusterConnection, ConnectionHandle, ConnectionResolver},
    invocation_logger::{InvocationEvent, InvocationLogger, InvocationOutcome, NoInvocationLogger},
    table_renderer::TableRenderer,
};
pub use registry::{RegisteredCommand, ToolRegistry};
pub use use_cases::{
    dispatch::Dispatcher,
    handler::{CommandHandler, HandlerBinding},
    list_resources::ListResourcesHandler,
    pod_logs::{LogRetriever, PodLogsHandler},
    switch_context::SwitchContextHandler,
};
