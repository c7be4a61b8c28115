//! Presentation layer for kdebug-mcp
//!
//! This crate contains the CLI definition, table and catalog rendering, and
//! the MCP server handler.

pub mod cli;
pub mod mcp;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use mcp::{DEFAULT_INSTRUCTIONS, KdebugServer};
pub use output::{PrettyTableRenderer, builtin_catalog, format_catalog};
