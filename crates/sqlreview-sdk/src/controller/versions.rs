use sqlreview_core::{Notice, VersionDiff, VersionEntry};
use sqlreview_types::{SqlId, SqlVersion, VersionId};

use super::{Controller, OpenedStatement};
use crate::error::Error;

/// Outcome of a restore; `statement` is the reloaded editor content.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RestoreOutcome {
    pub version_id: VersionId,
    pub statement: Option<OpenedStatement>,
}

impl Controller {
    /// Opens the history panel for the statement in the editor.
    pub async fn list_versions(&mut self) -> Option<Vec<VersionEntry>> {
        self.version_entries().await.map(|(_, entries)| entries)
    }

    pub async fn view_version(&mut self, version_id: VersionId) -> Option<SqlVersion> {
        let (_, entries) = self.version_entries().await?;
        let entry = self.find_entry(&entries, version_id)?;
        let version = entry.version.clone();
        if let Err(err) = self.state.versions.view(version_id) {
            return self.fail(err.into());
        }
        Some(version)
    }

    /// Diffs a version against the next-newer one in the list.
    pub async fn compare_version(&mut self, version_id: VersionId) -> Option<VersionDiff> {
        let (versions, entries) = self.version_entries().await?;
        let entry = self.find_entry(&entries, version_id)?;

        let Some(newer_id) = entry.compare_with else {
            return self.fail(Error::InvalidInput(
                "The newest version has nothing newer to compare with".to_string(),
            ));
        };
        let Some(newer) = versions.iter().find(|v| v.id == newer_id) else {
            return self.fail(Error::InvalidState(format!("Version {} not found", newer_id)));
        };

        let diff = VersionDiff::between(&entry.version, newer);
        if let Err(err) = self.state.versions.compare(version_id, newer_id) {
            return self.fail(err.into());
        }
        Some(diff)
    }

    /// Marks a version for restore. The newest version cannot be restored.
    pub async fn select_version(&mut self, version_id: VersionId) -> Option<VersionEntry> {
        let (_, entries) = self.version_entries().await?;
        let entry = self.find_entry(&entries, version_id)?;

        if !entry.can_restore() {
            return self.fail(Error::InvalidInput(
                "The newest version is already current".to_string(),
            ));
        }
        if let Err(err) = self.state.versions.select(version_id) {
            return self.fail(err.into());
        }
        Some(entry)
    }

    /// Restores the selected version after confirmation, then reloads the
    /// statement from the service, discarding editor changes.
    ///
    /// Without a selection this only warns.
    pub async fn restore_version(&mut self) -> Option<RestoreOutcome> {
        let Some(version_id) = self.state.versions.selected() else {
            self.notify(Notice::warning("Select a version to restore first"));
            return None;
        };

        if !self.confirm(&format!(
            "Restore version {}? Unsaved changes in the editor will be lost.",
            version_id
        )) {
            return None;
        }

        let ticket = match self.state.versions.begin_restore() {
            Ok(ticket) => ticket,
            Err(err) => return self.fail(err.into()),
        };

        let result = self
            .client
            .statements()
            .restore(ticket.sql_id(), ticket.version_id())
            .await;
        let succeeded = result.is_ok();
        self.state.versions.finish_restore(ticket, succeeded);
        self.settle(result)?;

        self.notify(Notice::success("Version restored"));
        let statement = self.open_statement(ticket.sql_id()).await;
        Some(RestoreOutcome {
            version_id,
            statement,
        })
    }

    pub fn close_versions(&mut self) {
        self.state.versions.close();
    }

    async fn fetch_versions(&mut self, sql_id: SqlId) -> Option<Vec<SqlVersion>> {
        let result = self.client.statements().versions(sql_id).await;
        self.settle(result)
    }

    /// Fetches the list for the open statement, opening the panel if needed.
    async fn version_entries(&mut self) -> Option<(Vec<SqlVersion>, Vec<VersionEntry>)> {
        let sql_id = self.current_sql()?;
        let versions = self.fetch_versions(sql_id).await?;
        if self.state.versions.sql_id() != Some(sql_id) {
            self.state.versions.open(sql_id);
        }
        let entries = VersionEntry::from_versions(&versions);
        Some((versions, entries))
    }

    fn find_entry(
        &mut self,
        entries: &[VersionEntry],
        version_id: VersionId,
    ) -> Option<VersionEntry> {
        match entries.iter().find(|e| e.version.id == version_id) {
            Some(entry) => Some(entry.clone()),
            None => self.fail(Error::InvalidInput(format!(
                "Version {} not found for this statement",
                version_id
            ))),
        }
    }
}
