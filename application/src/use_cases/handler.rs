//! Command handler capability.
//!
//! A [`CommandHandler`] declares the typed parameters it needs and turns them
//! into text. [`HandlerBinding`] is the object-safe form the registry stores;
//! every handler gets it through the blanket impl, which converts coerced
//! arguments into the handler's parameter struct before the body runs.

use crate::ports::cluster::ConnectionHandle;
use async_trait::async_trait;
use kdebug_domain::{CoercedArguments, DebugError, FromArguments};

#[async_trait]
pub trait CommandHandler: Send + Sync {
    type Params: FromArguments + Send;

    /// Run the command against `connection`, the handle taken for this
    /// invocation.
    async fn handle(
        &self,
        connection: ConnectionHandle,
        params: Self::Params,
    ) -> Result<String, DebugError>;
}

/// Type-erased handler, as stored in the registry.
#[async_trait]
pub trait HandlerBinding: Send + Sync {
    async fn call(
        &self,
        connection: ConnectionHandle,
        arguments: &CoercedArguments,
    ) -> Result<String, DebugError>;
}

#[async_trait]
impl<H: CommandHandler> HandlerBinding for H {
    async fn call(
        &self,
        connection: ConnectionHandle,
        arguments: &CoercedArguments,
    ) -> Result<String, DebugError> {
        let params = H::Params::from_arguments(arguments)?;
        self.handle(connection, params).await
    }
}
