use serde::{Deserialize, Serialize};

use super::VersionId;
use crate::Timestamp;

/// Immutable snapshot in a statement's history. Lists arrive newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlVersion {
    pub id: VersionId,
    pub version: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sql_content: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub is_current: bool,
}
