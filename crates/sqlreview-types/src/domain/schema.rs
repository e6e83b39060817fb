use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of schema object that can be inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Table,
    View,
}

impl ObjectKind {
    /// Path segment used by `/schema/{table|view}/{name}`
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Table => "table",
            ObjectKind::View => "view",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ObjectKind::Table),
            "view" => Ok(ObjectKind::View),
            other => Err(format!("unknown object kind '{}' (expected table or view)", other)),
        }
    }
}

/// Tree level of the schema explorer. Never embeds columns or indexes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    #[serde(default)]
    pub tables: Vec<SchemaObject>,
    #[serde(default)]
    pub views: Vec<SchemaObject>,
    #[serde(default)]
    pub connection_info: Option<SchemaConnectionInfo>,
}

impl DatabaseSchema {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.views.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaObject {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaConnectionInfo {
    pub name: String,
    pub db_type: String,
    #[serde(default)]
    pub database_name: Option<String>,
}

/// Detail level for one table or view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetails {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default)]
    pub indexes: Vec<IndexInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, rename = "type")]
    pub index_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_decode_type_fields() {
        let details: ObjectDetails = serde_json::from_value(serde_json::json!({
            "name": "orders",
            "columns": [
                {"name": "id", "type": "INTEGER", "nullable": false, "default": null, "comment": "pk"}
            ],
            "indexes": [
                {"name": "ix_orders_user", "columns": ["user_id", "created_at"], "unique": false, "type": "btree"}
            ]
        }))
        .unwrap();

        assert_eq!(details.columns[0].data_type, "INTEGER");
        assert_eq!(details.indexes[0].index_type.as_deref(), Some("btree"));
        assert_eq!(details.indexes[0].columns.len(), 2);
    }

    #[test]
    fn test_empty_schema() {
        let schema: DatabaseSchema =
            serde_json::from_str(r#"{"tables": [], "views": []}"#).unwrap();
        assert!(schema.is_empty());
    }
}
