//! Command domain module
//!
//! The catalog of commands a host can invoke, their parameter declarations,
//! and the conversion of loosely typed host arguments into typed parameters.

pub mod arguments;
pub mod entities;
pub mod id;
pub mod params;

pub use arguments::{CoercedArguments, InvocationArguments, coerce};
pub use entities::{CommandDefinition, ParameterSpec};
pub use id::CommandId;
pub use params::{ContextParams, FromArguments, ListParams, LogParams, NoParams};
