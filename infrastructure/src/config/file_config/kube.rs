//! Cluster access configuration from TOML (`[kube]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKubeConfig {
    /// Context to connect to at startup (kubeconfig's current context if unset)
    pub context: Option<String>,
    /// Explicit kubeconfig path (`KUBECONFIG` or `~/.kube/config` if unset)
    pub kubeconfig: Option<PathBuf>,
}
