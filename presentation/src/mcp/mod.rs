//! MCP surface: tool schemas and the server handler.

pub mod handler;
pub mod schema;

pub use handler::{DEFAULT_INSTRUCTIONS, KdebugServer};
pub use schema::input_schema;
