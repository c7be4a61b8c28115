//! CLI entrypoint for kdebug-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use kdebug_application::{ConnectionState, Dispatcher, TableRenderer, ToolRegistry};
use kdebug_domain::InvocationArguments;
use kdebug_infrastructure::{ConfigLoader, FileConfig, JsonlInvocationLogger, KubeConnectionResolver};
use kdebug_presentation::{Cli, Command, KdebugServer, PrettyTableRenderer, builtin_catalog};
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{line}");
        }
        return Ok(());
    }

    let command = cli.command();
    if !command.needs_cluster() {
        print!("{}", builtin_catalog());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;

    for issue in config.validate() {
        warn!(field = %issue.field, "{}", issue.message);
    }

    let _ = rustls::crypto::ring::default_provider().install_default();

    info!("Starting kdebug-mcp");

    // === Dependency Injection ===
    let kubeconfig = cli.kubeconfig.clone().or(config.kube.kubeconfig.clone());
    let resolver = Arc::new(KubeConnectionResolver::new(kubeconfig));
    let initial_context = cli.context.as_deref().or(config.initial_context());
    let state = Arc::new(
        ConnectionState::connect(resolver, initial_context)
            .await
            .context("Failed to connect to the cluster")?,
    );

    let (table_style, _) = config.output.parse_table_style();
    let renderer: Arc<dyn TableRenderer> = Arc::new(PrettyTableRenderer::new(table_style));
    let registry = ToolRegistry::builtin(state.clone(), renderer);

    let mut dispatcher = Dispatcher::new(registry, state);
    if let Some(path) = &config.logging.invocations {
        match JsonlInvocationLogger::new(path) {
            Some(logger) => dispatcher = dispatcher.with_invocation_logger(Arc::new(logger)),
            None => warn!(path = %path.display(), "Invocation log disabled"),
        }
    }
    let dispatcher = Arc::new(dispatcher);

    match command {
        Command::Serve => {
            let mut server = KdebugServer::new(dispatcher);
            if let Some(instructions) = &config.server.instructions {
                server = server.with_instructions(instructions.clone());
            }

            info!("Serving MCP on stdio");
            let service = server
                .serve(stdio())
                .await
                .context("Failed to start MCP server")?;
            service.waiting().await.context("MCP server stopped")?;
        }
        Command::Tools => print!("{}", builtin_catalog()),
        Command::Call { command, args } => {
            let arguments: InvocationArguments = args
                .into_iter()
                .map(|(key, value)| (key, serde_json::Value::String(value)))
                .collect();

            let output = dispatcher.invoke(&command, arguments).await?;
            println!("{output}");
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = cli.config.as_deref().filter(|path| !path.exists()) {
        bail!("Config file not found: {}", path.display());
    }

    ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")
}

/// Install the stderr subscriber, plus a file layer when `log_file` is set.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}
