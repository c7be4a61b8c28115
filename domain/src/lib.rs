//! Domain layer for kdebug
//!
//! Pure types and rules with no knowledge of how a cluster is reached or how
//! output reaches the host.
//!
//! # Core Concepts
//!
//! ## Commands
//!
//! A fixed catalog of read-only commands ([`CommandId`]). Each declares its
//! parameters ([`CommandDefinition`]); host arguments are coerced against that
//! declaration before any handler runs.
//!
//! ## Resources
//!
//! Eight inspectable kinds ([`ResourceKind`]), each projected into a table
//! of display strings ([`ProjectedTable`]) with a fixed header.

pub mod command;
pub mod config;
pub mod core;
pub mod resource;

pub use command::{
    CoercedArguments, CommandDefinition, CommandId, ContextParams, FromArguments,
    InvocationArguments, ListParams, LogParams, NoParams, ParameterSpec, coerce,
};
pub use config::TableStyle;
pub use core::error::{CommandError, DebugError};
pub use resource::{
    DEFAULT_NAMESPACE, LogQuery, ProjectedTable, ResourceKind, ResourceQuery, ResourceRow,
    UNKNOWN_AGE, age_since, format_age,
};
