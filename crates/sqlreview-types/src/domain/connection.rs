use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConnectionId;
use crate::Timestamp;

/// Database engines the review service can connect to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Mysql,
    Postgresql,
    Sqlserver,
    Oracle,
    Sqlite,
}

impl DbType {
    pub const ALL: [DbType; 5] = [
        DbType::Mysql,
        DbType::Postgresql,
        DbType::Sqlserver,
        DbType::Oracle,
        DbType::Sqlite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::Mysql => "mysql",
            DbType::Postgresql => "postgresql",
            DbType::Sqlserver => "sqlserver",
            DbType::Oracle => "oracle",
            DbType::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        DbType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| {
                format!(
                    "unknown database type '{}' (expected one of: mysql, postgresql, sqlserver, oracle, sqlite)",
                    s
                )
            })
    }
}

/// Connection record as returned by the service. The stored password is never
/// part of a read response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConnection {
    pub id: ConnectionId,
    pub name: String,
    pub db_type: DbType,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Editable connection draft, sent for create, update and dry-run test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionForm {
    pub name: String,
    pub db_type: Option<DbType>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_name: Option<String>,
    pub username: Option<String>,
    /// Write-only. Only sent when the user typed a new value; never kept in
    /// persisted drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub description: Option<String>,
}

impl ConnectionForm {
    /// Draft prefilled from a stored record. The password stays empty.
    pub fn from_record(record: &DatabaseConnection) -> Self {
        Self {
            name: record.name.clone(),
            db_type: Some(record.db_type),
            host: record.host.clone(),
            port: record.port,
            database_name: record.database_name.clone(),
            username: record.username.clone(),
            password: None,
            description: record.description.clone(),
        }
    }

    /// Copy of the draft safe to persist between actions.
    pub fn without_secret(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }
}

/// Result of `POST /api/db-connections/test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_type_parse_is_case_insensitive() {
        assert_eq!("PostgreSQL".parse::<DbType>().unwrap(), DbType::Postgresql);
        assert!("db2".parse::<DbType>().is_err());
    }

    #[test]
    fn test_form_from_record_never_carries_password() {
        let record: DatabaseConnection = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "orders",
            "db_type": "mysql",
            "host": "db.local",
            "port": 3306,
            "database_name": "shop",
            "username": "reader",
            "description": null,
            "created_at": "2024-05-01T10:00:00"
        }))
        .unwrap();

        let form = ConnectionForm::from_record(&record);
        assert_eq!(form.name, "orders");
        assert_eq!(form.port, Some(3306));
        assert!(form.password.is_none());

        let body = serde_json::to_value(&form).unwrap();
        assert!(body.get("password").is_none());
    }

    #[test]
    fn test_without_secret_drops_password() {
        let form = ConnectionForm {
            name: "x".to_string(),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        assert!(form.without_secret().password.is_none());
        assert_eq!(form.without_secret().name, "x");
    }
}
