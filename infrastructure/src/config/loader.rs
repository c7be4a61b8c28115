//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["kdebug.toml", ".kdebug.toml"];

/// Prefix of configuration environment variables; `__` separates sections.
pub const ENV_PREFIX: &str = "KDEBUG_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `KDEBUG_<SECTION>__<KEY>` (e.g. `KDEBUG_KUBE__CONTEXT`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./kdebug.toml` or `./.kdebug.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/kdebug-mcp/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider stack, before extraction.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/kdebug-mcp/config.toml if set,
    /// otherwise falls back to ~/.config/kdebug-mcp/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kdebug-mcp").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources in priority order (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mark = |found: bool| if found { "[FOUND]" } else { "[     ]" };
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ ENV ] Environment: {ENV_PREFIX}<SECTION>__<KEY>"));

        if let Some(path) = config_path {
            lines.push(format!(
                "  {} Explicit: {}",
                mark(path.exists()),
                path.display()
            ));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./kdebug.toml or ./.kdebug.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            lines.push(format!(
                "  {} Global:  {}",
                mark(path.exists()),
                path.display()
            ));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.kube.context.is_none());
        assert_eq!(config.output.table_style, "bordered");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("kdebug-mcp"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file("kdebug.toml", "[kube]\ncontext = \"kind-dev\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.kube.context.as_deref(), Some("kind-dev"));
            assert_eq!(config.output.table_style, "bordered");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".kdebug.toml", "[kube]\ncontext = \"kind-dev\"\n")?;
            jail.create_file(
                "override.toml",
                "[kube]\ncontext = \"staging\"\n[output]\ntable_style = \"plain\"\n",
            )?;

            let config = ConfigLoader::load(Some(Path::new("override.toml"))).map_err(|e| *e)?;
            assert_eq!(config.kube.context.as_deref(), Some("staging"));
            assert_eq!(config.output.table_style, "plain");
            Ok(())
        });
    }

    #[test]
    fn test_environment_has_highest_priority() {
        Jail::expect_with(|jail| {
            jail.create_file("kdebug.toml", "[kube]\ncontext = \"kind-dev\"\n")?;
            jail.set_env("KDEBUG_KUBE__CONTEXT", "from-env");
            jail.set_env("KDEBUG_LOGGING__INVOCATIONS", "/tmp/calls.jsonl");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.kube.context.as_deref(), Some("from-env"));
            assert_eq!(
                config.logging.invocations,
                Some(PathBuf::from("/tmp/calls.jsonl"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("kdebug.toml", "[kube\ncontext = ")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_lists_explicit_path() {
        let lines = ConfigLoader::describe_sources(Some(Path::new("/nonexistent/kdebug.toml")));
        assert!(lines.iter().any(|l| l.contains("Explicit: /nonexistent/kdebug.toml")));
        assert!(lines.last().unwrap().contains("built-in defaults"));
    }
}
