//! Port for structured invocation logging.
//!
//! Defines the [`InvocationLogger`] trait for recording one event per
//! dispatched command to a structured log.
//!
//! This is separate from `tracing`-based diagnostics: tracing carries
//! human-readable messages, while this port captures a machine-readable
//! record (JSONL) of what hosts asked for and how it went.

use serde::Serialize;
use serde_json::Value;

/// Final state of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationOutcome {
    Ok,
    Error,
    Cancelled,
}

/// One dispatched command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationEvent {
    pub command: String,
    /// Arguments exactly as the host sent them.
    pub arguments: Value,
    pub outcome: InvocationOutcome,
    pub duration_ms: u64,
    /// Size of the returned text, for successful invocations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Port for logging invocation events.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// write failures so logging never changes the result of a dispatch.
pub trait InvocationLogger: Send + Sync {
    fn log(&self, event: InvocationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInvocationLogger;

impl InvocationLogger for NoInvocationLogger {
    fn log(&self, _event: InvocationEvent) {}
}
