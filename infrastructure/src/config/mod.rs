//! Configuration file loading for kdebug-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KDEBUG_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./kdebug.toml` or `./.kdebug.toml`
//! 4. Global: `$XDG_CONFIG_HOME/kdebug-mcp/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileKubeConfig, FileLoggingConfig, FileOutputConfig,
    FileServerConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
