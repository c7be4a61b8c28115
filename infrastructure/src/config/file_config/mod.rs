//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod kube;
mod logging;
mod output;
mod server;

pub use kube::FileKubeConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Cluster access
    pub kube: FileKubeConfig,
    /// Table rendering
    pub output: FileOutputConfig,
    /// Diagnostic and invocation logs
    pub logging: FileLoggingConfig,
    /// MCP server settings
    pub server: FileServerConfig,
}

/// A problem found while validating configuration. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub(crate) fn invalid_value(
        field: &str,
        value: &str,
        valid: &[&str],
        fallback: &str,
    ) -> Self {
        Self {
            field: field.to_string(),
            message: format!(
                "{field}: unknown value '{value}' (expected one of: {}), falling back to '{fallback}'",
                valid.join(", ")
            ),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.output.parse_table_style().1);

        if self.kube.context.as_deref() == Some("") {
            issues.push(ConfigIssue {
                field: "kube.context".to_string(),
                message: "kube.context is empty, using the kubeconfig's current context"
                    .to_string(),
            });
        }

        issues
    }

    /// Startup context, ignoring an empty value.
    pub fn initial_context(&self) -> Option<&str> {
        self.kube.context.as_deref().filter(|c| !c.is_empty())
    }
}
