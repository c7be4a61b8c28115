//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod cluster;
pub mod invocation_logger;
pub mod table_renderer;
