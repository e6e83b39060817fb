use sqlreview_core::{Notice, format_sql};
use sqlreview_types::HealthStatus;

use super::Controller;

impl Controller {
    /// Reformats the editor content in place.
    pub fn format_editor(&mut self) -> Option<String> {
        match format_sql(&self.state.editor.content) {
            Ok(formatted) => {
                self.state.editor.content = formatted.clone();
                self.notify(Notice::success("SQL formatted"));
                Some(formatted)
            }
            Err(err) => self.fail(err.into()),
        }
    }

    pub async fn health(&mut self) -> Option<HealthStatus> {
        let result = self.client.health().await;
        let status = self.settle(result)?;
        if !status.is_healthy() {
            self.notify(Notice::warning(format!("Service reports '{}'", status.status)));
        }
        Some(status)
    }
}
