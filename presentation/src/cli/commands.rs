//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for kdebug-mcp
#[derive(Parser, Debug)]
#[command(name = "kdebug-mcp")]
#[command(author, version, about = "Read-only Kubernetes debugging over MCP")]
#[command(long_about = r#"
kdebug-mcp lets an AI assistant inspect a Kubernetes cluster without changing
it. It lists nodes, pods, services, workloads and events, fetches pod logs, and
switches between kubeconfig contexts.

By default it serves the Model Context Protocol on stdio. The same commands
can be run directly with `kdebug-mcp call`.

Configuration files are loaded from (in priority order):
1. KDEBUG_* environment variables (e.g. KDEBUG_KUBE__CONTEXT)
2. --config <path>     Explicit config file
3. ./kdebug.toml       Project-level config
4. ~/.config/kdebug-mcp/config.toml   Global config

Example:
  kdebug-mcp
  kdebug-mcp --context kind-dev call pods -a namespace=kube-system
  kdebug-mcp call podLogs -a name=web-1 -a container=sidecar
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Kubeconfig context to use at startup
    #[arg(long, global = true, value_name = "NAME")]
    pub context: Option<String>,

    /// Kubeconfig file (defaults to KUBECONFIG or ~/.kube/config)
    #[arg(long, global = true, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve MCP on stdio (default)
    Serve,
    /// List the available commands and their parameters
    Tools,
    /// Run one command and print its output
    Call {
        /// Command name (e.g. pods, podLogs)
        command: String,
        /// Argument as key=value (repeatable)
        #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
    },
}

impl Command {
    /// Whether this surface talks to a cluster. `tools` only prints the
    /// static catalog.
    pub fn needs_cluster(&self) -> bool {
        !matches!(self, Command::Tools)
    }
}

impl Cli {
    /// The selected surface, `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
