//! Domain error types
//!
//! Every failure a dispatch can produce is one variant of [`DebugError`].
//! All of them are terminal for the invocation that raised them; nothing in
//! the crate retries.

use crate::resource::ResourceKind;
use thiserror::Error;

/// Errors raised while resolving, validating or executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing required parameter '{0}'")]
    MissingRequiredParameter(String),

    #[error("parameter '{parameter}' must be a {expected}, got {actual}")]
    InvalidParameterType {
        parameter: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("failed to resolve cluster context '{context}': {reason}")]
    ContextResolution { context: String, reason: String },

    #[error("failed to list {kind}: {cause}")]
    ResourceQueryFailed { kind: ResourceKind, cause: String },

    #[error("{} '{name}' not found in namespace '{namespace}'", .kind.singular())]
    ResourceNotFound {
        kind: ResourceKind,
        namespace: String,
        name: String,
    },

    #[error("failed to read logs of pod '{pod}': {cause}")]
    LogStream { pod: String, cause: String },

    #[error("{} '{name}' is invalid: {reason}", .kind.singular())]
    InvalidResource {
        kind: ResourceKind,
        name: String,
        reason: String,
    },

    #[error("operation cancelled")]
    Cancelled,
}

impl DebugError {
    pub fn query_failed(kind: ResourceKind, cause: impl std::fmt::Display) -> Self {
        Self::ResourceQueryFailed {
            kind,
            cause: cause.to_string(),
        }
    }

    pub fn context_resolution(context: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::ContextResolution {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub fn log_stream(pod: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::LogStream {
            pod: pod.into(),
            cause: cause.to_string(),
        }
    }

    pub fn invalid_resource(
        kind: ResourceKind,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidResource {
            kind,
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DebugError::Cancelled)
    }

    /// Stable machine-readable code, used by the invocation log.
    pub fn code(&self) -> &'static str {
        match self {
            DebugError::UnknownCommand(_) => "UNKNOWN_COMMAND",
            DebugError::MissingRequiredParameter(_) => "MISSING_REQUIRED_PARAMETER",
            DebugError::InvalidParameterType { .. } => "INVALID_PARAMETER_TYPE",
            DebugError::ContextResolution { .. } => "CONTEXT_RESOLUTION",
            DebugError::ResourceQueryFailed { .. } => "RESOURCE_QUERY_FAILED",
            DebugError::ResourceNotFound { .. } => "RESOURCE_NOT_FOUND",
            DebugError::LogStream { .. } => "LOG_STREAM",
            DebugError::InvalidResource { .. } => "INVALID_RESOURCE",
            DebugError::Cancelled => "CANCELLED",
        }
    }
}

/// A [`DebugError`] tagged with the command that produced it.
///
/// This is the single user-facing error value a host sees for a failed
/// invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{command}: {source}")]
pub struct CommandError {
    pub command: String,
    #[source]
    pub source: DebugError,
}

impl CommandError {
    pub fn new(command: impl Into<String>, source: DebugError) -> Self {
        Self {
            command: command.into(),
            source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.source.is_cancelled()
    }
}
