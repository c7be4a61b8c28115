//! Dispatch use case.
//!
//! [`Dispatcher`] is the single entry point for hosts: command name and raw
//! arguments in, text or a [`CommandError`] out.
//!
//! 1. Resolve the command in the [`ToolRegistry`]
//! 2. Coerce the arguments against its definition
//! 3. Take the current connection handle once
//! 4. Run the handler and wrap any failure with the command name

use crate::connection::ConnectionState;
use crate::ports::invocation_logger::{
    InvocationEvent, InvocationLogger, InvocationOutcome, NoInvocationLogger,
};
use crate::registry::ToolRegistry;
use kdebug_domain::{CommandError, DebugError, InvocationArguments, coerce};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub struct Dispatcher {
    registry: ToolRegistry,
    state: Arc<ConnectionState>,
    invocation_logger: Arc<dyn InvocationLogger>,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, state: Arc<ConnectionState>) -> Self {
        Self {
            registry,
            state,
            invocation_logger: Arc::new(NoInvocationLogger),
        }
    }

    /// Set a custom invocation logger.
    pub fn with_invocation_logger(mut self, logger: Arc<dyn InvocationLogger>) -> Self {
        self.invocation_logger = logger;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn state(&self) -> &Arc<ConnectionState> {
        &self.state
    }

    /// Run one command to completion.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: InvocationArguments,
    ) -> Result<String, CommandError> {
        self.invoke_cancellable(name, arguments, &CancellationToken::new())
            .await
    }

    /// Run one command, abandoning it when `cancel` fires.
    ///
    /// Cancellation drops the in-flight request and yields
    /// [`DebugError::Cancelled`].
    pub async fn invoke_cancellable(
        &self,
        name: &str,
        arguments: InvocationArguments,
        cancel: &CancellationToken,
    ) -> Result<String, CommandError> {
        let started = Instant::now();

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DebugError::Cancelled),
            result = self.dispatch(name, &arguments) => result,
        };

        let elapsed = started.elapsed();
        match &result {
            Ok(text) => info!(
                command = name,
                bytes = text.len(),
                duration_ms = elapsed.as_millis() as u64,
                "Command completed"
            ),
            Err(e) if e.is_cancelled() => info!(command = name, "Command cancelled"),
            Err(e) => warn!(command = name, code = e.code(), error = %e, "Command failed"),
        }
        self.log_invocation(name, &arguments, &result, elapsed);

        result.map_err(|e| CommandError::new(name, e))
    }

    async fn dispatch(
        &self,
        name: &str,
        arguments: &InvocationArguments,
    ) -> Result<String, DebugError> {
        let command = self.registry.lookup(name)?;
        let definition = command.definition();

        for key in arguments.keys() {
            if definition.parameter(key).is_none() {
                debug!(command = name, argument = key, "Ignoring undeclared argument");
            }
        }
        let coerced = coerce(definition, arguments)?;

        let connection = self.state.current();
        debug!(command = name, context = connection.context(), "Dispatching command");
        command.handler().call(connection, &coerced).await
    }

    fn log_invocation(
        &self,
        name: &str,
        arguments: &InvocationArguments,
        result: &Result<String, DebugError>,
        elapsed: Duration,
    ) {
        let (outcome, bytes, error) = match result {
            Ok(text) => (InvocationOutcome::Ok, Some(text.len()), None),
            Err(DebugError::Cancelled) => (InvocationOutcome::Cancelled, None, None),
            Err(e) => (InvocationOutcome::Error, None, Some(e.to_string())),
        };

        self.invocation_logger.log(InvocationEvent {
            command: name.to_string(),
            arguments: serde_json::to_value(arguments).unwrap_or_default(),
            outcome,
            duration_ms: elapsed.as_millis() as u64,
            bytes,
            error,
        });
    }
}
