use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SQLREVIEW_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.sqlreview
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SQLREVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("sqlreview"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".sqlreview"));
    }

    anyhow::bail!("Could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_SERVER.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Ask before deletes and restores
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm: default_confirm(),
        }
    }
}

fn default_confirm() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Server priority: `--server`, then SQLREVIEW_SERVER, then config.toml.
    pub fn resolve_server(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var("SQLREVIEW_SERVER").ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.server.base_url.clone())
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.server.base_url, DEFAULT_SERVER);
        assert!(config.ui.confirm);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nconfirm = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.ui.confirm);
        assert_eq!(config.server.base_url, DEFAULT_SERVER);
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.server.base_url = "http://review.internal:9000".to_string();

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_explicit_server_wins_and_is_trimmed() {
        let config = Config::default();
        assert_eq!(
            config.resolve_server(Some("http://10.0.0.5:8000/")),
            "http://10.0.0.5:8000"
        );
    }

    #[test]
    fn test_explicit_data_dir_is_used_verbatim() {
        let dir = resolve_data_dir(Some("/tmp/sqlreview-data")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/sqlreview-data"));
    }
}
