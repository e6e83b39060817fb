use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use sqlreview_types::{SqlId, SqlVersion, VersionId};

use crate::error::{Error, Result};

/// Version history panel of the statement open in the editor.
///
/// ```text
/// Closed -> Listing -> Viewing | Comparing | Selected -> Restoring -> Closed
///                                               ^-------- failure -----/
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VersionWorkflow {
    #[default]
    Closed,
    Listing {
        sql_id: SqlId,
    },
    Viewing {
        sql_id: SqlId,
        version_id: VersionId,
    },
    Comparing {
        sql_id: SqlId,
        older: VersionId,
        newer: VersionId,
    },
    Selected {
        sql_id: SqlId,
        version_id: VersionId,
    },
    Restoring {
        sql_id: SqlId,
        version_id: VersionId,
    },
}

/// Proof that a restore was started from a selected version.
///
/// Only [`VersionWorkflow::begin_restore`] hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreTicket {
    sql_id: SqlId,
    version_id: VersionId,
}

impl RestoreTicket {
    pub fn sql_id(&self) -> SqlId {
        self.sql_id
    }

    pub fn version_id(&self) -> VersionId {
        self.version_id
    }
}

impl VersionWorkflow {
    pub fn open(&mut self, sql_id: SqlId) {
        *self = VersionWorkflow::Listing { sql_id };
    }

    pub fn close(&mut self) {
        *self = VersionWorkflow::Closed;
    }

    /// Statement the panel is open for
    pub fn sql_id(&self) -> Option<SqlId> {
        match self {
            VersionWorkflow::Closed => None,
            VersionWorkflow::Listing { sql_id }
            | VersionWorkflow::Viewing { sql_id, .. }
            | VersionWorkflow::Comparing { sql_id, .. }
            | VersionWorkflow::Selected { sql_id, .. }
            | VersionWorkflow::Restoring { sql_id, .. } => Some(*sql_id),
        }
    }

    pub fn view(&mut self, version_id: VersionId) -> Result<()> {
        let sql_id = self.open_for()?;
        *self = VersionWorkflow::Viewing { sql_id, version_id };
        Ok(())
    }

    pub fn compare(&mut self, older: VersionId, newer: VersionId) -> Result<()> {
        let sql_id = self.open_for()?;
        *self = VersionWorkflow::Comparing {
            sql_id,
            older,
            newer,
        };
        Ok(())
    }

    pub fn select(&mut self, version_id: VersionId) -> Result<()> {
        let sql_id = self.open_for()?;
        *self = VersionWorkflow::Selected { sql_id, version_id };
        Ok(())
    }

    pub fn selected(&self) -> Option<VersionId> {
        match self {
            VersionWorkflow::Selected { version_id, .. } => Some(*version_id),
            _ => None,
        }
    }

    pub fn begin_restore(&mut self) -> Result<RestoreTicket> {
        match *self {
            VersionWorkflow::Selected { sql_id, version_id } => {
                *self = VersionWorkflow::Restoring { sql_id, version_id };
                Ok(RestoreTicket { sql_id, version_id })
            }
            _ => Err(Error::InvalidState(
                "Select a version to restore first".to_string(),
            )),
        }
    }

    /// Success closes the panel; failure keeps the selection.
    pub fn finish_restore(&mut self, ticket: RestoreTicket, succeeded: bool) {
        *self = if succeeded {
            VersionWorkflow::Closed
        } else {
            VersionWorkflow::Selected {
                sql_id: ticket.sql_id,
                version_id: ticket.version_id,
            }
        };
    }

    /// An interrupted restore falls back to its selection.
    pub fn settle(&mut self) {
        if let VersionWorkflow::Restoring { sql_id, version_id } = *self {
            *self = VersionWorkflow::Selected { sql_id, version_id };
        }
    }

    fn open_for(&self) -> Result<SqlId> {
        self.sql_id()
            .ok_or_else(|| Error::InvalidState("Open the version history first".to_string()))
    }
}

/// A version list row with the actions it exposes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionEntry {
    pub version: SqlVersion,
    pub is_newest: bool,
    /// Next-newer version in the list; compare diffs against it
    pub compare_with: Option<VersionId>,
}

impl VersionEntry {
    /// Builds rows from a newest-first list. Only non-newest rows can be
    /// compared or restored.
    pub fn from_versions(versions: &[SqlVersion]) -> Vec<VersionEntry> {
        versions
            .iter()
            .enumerate()
            .map(|(index, version)| VersionEntry {
                version: version.clone(),
                is_newest: index == 0,
                compare_with: index.checked_sub(1).map(|prev| versions[prev].id),
            })
            .collect()
    }

    pub fn can_compare(&self) -> bool {
        self.compare_with.is_some()
    }

    pub fn can_restore(&self) -> bool {
        !self.is_newest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Equal,
    Delete,
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub tag: DiffTag,
    pub text: String,
}

/// Line diff of `sql_content` from an older to a newer version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionDiff {
    pub older: SqlVersion,
    pub newer: SqlVersion,
    pub lines: Vec<DiffLine>,
}

impl VersionDiff {
    pub fn between(older: &SqlVersion, newer: &SqlVersion) -> Self {
        let old_text = older.sql_content.as_deref().unwrap_or_default();
        let new_text = newer.sql_content.as_deref().unwrap_or_default();

        let lines = TextDiff::from_lines(old_text, new_text)
            .iter_all_changes()
            .map(|change| DiffLine {
                tag: match change.tag() {
                    ChangeTag::Equal => DiffTag::Equal,
                    ChangeTag::Delete => DiffTag::Delete,
                    ChangeTag::Insert => DiffTag::Insert,
                },
                text: change.value().trim_end_matches(['\r', '\n']).to_string(),
            })
            .collect();

        Self {
            older: older.clone(),
            newer: newer.clone(),
            lines,
        }
    }

    pub fn is_identical(&self) -> bool {
        self.lines.iter().all(|line| line.tag == DiffTag::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(id: i64, number: u32, sql: &str) -> SqlVersion {
        SqlVersion {
            id: VersionId::new(id),
            version: number,
            title: Some(format!("v{}", number)),
            description: None,
            sql_content: Some(sql.to_string()),
            created_at: None,
            is_current: false,
        }
    }

    #[test]
    fn test_only_older_versions_expose_actions() {
        let versions = vec![
            version(30, 3, "SELECT 3"),
            version(20, 2, "SELECT 2"),
            version(10, 1, "SELECT 1"),
        ];
        let entries = VersionEntry::from_versions(&versions);

        assert!(!entries[0].can_compare());
        assert!(!entries[0].can_restore());
        assert_eq!(entries[1].compare_with, Some(VersionId::new(30)));
        assert!(entries[1].can_restore());
        assert_eq!(entries[2].compare_with, Some(VersionId::new(20)));
        assert!(entries[2].can_restore());
    }

    #[test]
    fn test_restore_requires_selection() {
        let mut workflow = VersionWorkflow::default();
        assert!(workflow.begin_restore().is_err());

        workflow.open(SqlId::new(1));
        assert!(workflow.begin_restore().is_err());

        workflow.select(VersionId::new(20)).unwrap();
        let ticket = workflow.begin_restore().unwrap();
        assert_eq!(ticket.version_id(), VersionId::new(20));
        assert!(matches!(workflow, VersionWorkflow::Restoring { .. }));
    }

    #[test]
    fn test_failed_restore_keeps_selection() {
        let mut workflow = VersionWorkflow::default();
        workflow.open(SqlId::new(1));
        workflow.select(VersionId::new(20)).unwrap();
        let ticket = workflow.begin_restore().unwrap();

        workflow.finish_restore(ticket, false);
        assert_eq!(workflow.selected(), Some(VersionId::new(20)));

        let ticket = workflow.begin_restore().unwrap();
        workflow.finish_restore(ticket, true);
        assert_eq!(workflow, VersionWorkflow::Closed);
    }

    #[test]
    fn test_actions_need_open_panel() {
        let mut workflow = VersionWorkflow::default();
        assert!(workflow.select(VersionId::new(1)).is_err());
        assert!(workflow.view(VersionId::new(1)).is_err());
    }

    #[test]
    fn test_diff_marks_changed_lines() {
        let older = version(10, 1, "SELECT id\nFROM users");
        let newer = version(20, 2, "SELECT id, name\nFROM users");
        let diff = VersionDiff::between(&older, &newer);

        assert!(!diff.is_identical());
        assert_eq!(
            diff.lines,
            vec![
                DiffLine {
                    tag: DiffTag::Delete,
                    text: "SELECT id".into(),
                },
                DiffLine {
                    tag: DiffTag::Insert,
                    text: "SELECT id, name".into(),
                },
                DiffLine {
                    tag: DiffTag::Equal,
                    text: "FROM users".into(),
                },
            ]
        );
    }
}
