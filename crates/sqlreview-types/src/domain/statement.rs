use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ConnectionId, SqlId};
use crate::Timestamp;

/// Lifecycle status the service assigns to a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementStatus {
    #[default]
    Draft,
    Reviewed,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlStatement {
    pub id: SqlId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sql_content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: StatementStatus,
    #[serde(default)]
    pub db_connection_id: Option<ConnectionId>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub last_reviewed_at: Option<Timestamp>,
}

impl SqlStatement {
    /// Title shown in lists; untitled statements fall back to `SQL-<id>`.
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("SQL-{}", self.id),
        }
    }
}

/// One page of `GET /api/sql-statements/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementPage {
    #[serde(default)]
    pub items: Vec<SqlStatement>,
    pub page: u32,
    pub page_size: u32,
    pub pages: u32,
    pub total: u64,
}

/// Body of statement create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementForm {
    pub title: String,
    pub sql_content: String,
    pub description: String,
    pub db_connection_id: Option<ConnectionId>,
}

/// Result of `POST /api/sql-statements/import-csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub imported_count: u64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Result of `GET /api/sql-statements/statistics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementStatistics {
    pub total_count: u64,
    #[serde(default)]
    pub status_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub database_distribution: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decodes_service_payload() {
        let page: StatementPage = serde_json::from_value(serde_json::json!({
            "items": [{
                "id": 12,
                "title": "",
                "sql_content": "SELECT 1",
                "description": null,
                "status": "reviewed",
                "db_connection_id": null,
                "version": 2,
                "tags": null,
                "category": null,
                "created_at": "2024-06-01T09:00:00",
                "updated_at": null,
                "last_reviewed_at": null
            }],
            "page": 1,
            "page_size": 10,
            "pages": 1,
            "total": 1
        }))
        .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, StatementStatus::Reviewed);
        assert_eq!(page.items[0].display_title(), "SQL-12");
    }

    #[test]
    fn test_unrecognised_status_is_unknown() {
        let status: StatementStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, StatementStatus::Unknown);
    }
}
