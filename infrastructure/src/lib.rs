//! Infrastructure layer for kdebug
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the `kube`-backed cluster connection,
//! configuration file loading, and the JSONL invocation log.

pub mod cluster;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use cluster::{KubeConnection, KubeConnectionResolver};
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileKubeConfig, FileLoggingConfig, FileOutputConfig,
    FileServerConfig,
};
pub use logging::JsonlInvocationLogger;
