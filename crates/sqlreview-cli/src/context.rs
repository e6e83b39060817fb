use crate::config::Config;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;
use sqlreview_core::UiSelectionState;
use sqlreview_sdk::{AssumeYes, Client, Confirmer};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "state.json";

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    server: Option<String>,
    assume_yes: bool,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, server: Option<String>, assume_yes: bool) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            server,
            assume_yes,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.data_dir.join(CONFIG_FILE)))
    }

    pub fn server_url(&self) -> Result<String> {
        Ok(self.config()?.resolve_server(self.server.as_deref()))
    }

    pub fn client(&self) -> Result<Client> {
        let url = self.server_url()?;
        Client::connect(url.clone()).with_context(|| format!("Invalid server URL {}", url))
    }

    pub fn confirmer(&self) -> Result<Box<dyn Confirmer>> {
        if self.assume_yes || !self.config()?.ui.confirm {
            Ok(Box::new(AssumeYes))
        } else {
            Ok(Box::new(PromptConfirmer))
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    /// Selection state saved by the previous action; a missing file is a fresh start.
    pub fn load_state(&self) -> Result<UiSelectionState> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(UiSelectionState::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| {
            format!(
                "Corrupt state file {} (run 'sqlreview state reset')",
                path.display()
            )
        })
    }

    pub fn save_state(&self, state: &UiSelectionState) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(self.state_path(), content)?;
        Ok(())
    }

    pub fn reset_state(&self) -> Result<UiSelectionState> {
        let state = UiSelectionState::default();
        self.save_state(&state)?;
        Ok(state)
    }
}

/// Asks on stderr and reads the answer from stdin. Without a terminal the
/// answer is no.
struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            tracing::info!("no terminal to confirm '{}', pass --yes", prompt);
            return false;
        }

        eprint!("{} [y/N] ", prompt);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlreview_types::SqlId;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ExecutionContext) {
        let temp = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(temp.path().join("data"), None, false);
        (temp, ctx)
    }

    #[test]
    fn test_missing_state_is_default() {
        let (_temp, ctx) = setup();
        assert_eq!(ctx.load_state().unwrap(), UiSelectionState::default());
    }

    #[test]
    fn test_state_survives_save() {
        let (_temp, ctx) = setup();
        let mut state = UiSelectionState::default();
        state.current_sql_id = Some(SqlId::new(9));
        state.editor.title = "orders by day".to_string();

        ctx.save_state(&state).unwrap();
        assert_eq!(ctx.load_state().unwrap(), state);
    }

    #[test]
    fn test_corrupt_state_points_at_reset() {
        let (_temp, ctx) = setup();
        std::fs::create_dir_all(ctx.data_dir()).unwrap();
        std::fs::write(ctx.state_path(), "{not json").unwrap();

        let err = ctx.load_state().unwrap_err();
        assert!(err.to_string().contains("state reset"));
    }

    #[test]
    fn test_server_from_config_file() {
        let (_temp, ctx) = setup();
        std::fs::create_dir_all(ctx.data_dir()).unwrap();
        std::fs::write(
            ctx.data_dir().join("config.toml"),
            "[server]\nbase_url = \"http://review.local:8000\"\n",
        )
        .unwrap();

        // SQLREVIEW_SERVER is not set by the test harness
        if std::env::var("SQLREVIEW_SERVER").is_err() {
            assert_eq!(ctx.server_url().unwrap(), "http://review.local:8000");
        }
    }
}
