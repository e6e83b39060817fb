use std::path::{Path, PathBuf};

use serde::Serialize;
use sqlreview_core::{ImportDialog, Notice, export_file_name_today};
use sqlreview_types::{ConnectionId, ImportResult};

use super::{Controller, StatementListing};
use crate::error::Error;

#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub result: ImportResult,
    pub refreshed: Option<StatementListing>,
}

impl Controller {
    /// Shows the first rows of a CSV file. Import stays disabled unless the
    /// preview is ready.
    pub fn preview_csv(&mut self, file_name: &str, text: &str) -> ImportDialog {
        let dialog = ImportDialog::load(file_name, text);
        if let ImportDialog::Invalid { message, .. } = &dialog {
            self.notify(Notice::warning(message.clone()));
        }
        dialog
    }

    /// Uploads the whole file, then shows the first page again.
    pub async fn import_csv(
        &mut self,
        file_name: &str,
        content: Vec<u8>,
        db_connection_id: Option<ConnectionId>,
    ) -> Option<ImportOutcome> {
        let dialog = self.preview_csv(file_name, &String::from_utf8_lossy(&content));
        if !dialog.can_import() {
            return None;
        }

        let result = self
            .client
            .statements()
            .import_csv(file_name, content, db_connection_id)
            .await;
        let result = self.settle(result)?;

        self.notify(Notice::success(format!(
            "Imported {} SQL statements",
            result.imported_count
        )));
        if !result.errors.is_empty() {
            self.notify(Notice::warning(format!(
                "{} rows could not be imported",
                result.errors.len()
            )));
        }

        self.state.current_sql_page = 1;
        let refreshed = self.refresh_statements().await;
        Some(ImportOutcome { result, refreshed })
    }

    /// Downloads all statements as `sql_statements_YYYY-MM-DD.csv` in `dir`.
    pub async fn export_csv(&mut self, dir: &Path) -> Option<PathBuf> {
        let result = self.client.statements().export_csv().await;
        let bytes = self.settle(result)?;

        let path = dir.join(export_file_name_today());
        if let Err(err) = tokio::fs::write(&path, &bytes).await {
            return self.fail(Error::Io(err));
        }

        self.notify(Notice::success(format!("Exported to {}", path.display())));
        Some(path)
    }
}
