use serde::Serialize;
use sqlreview_types::{ColumnInfo, IndexInfo, ObjectKind};
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::{ObjectDetailsView, SchemaTreeView};

#[derive(Debug, Clone, Serialize)]
pub struct SchemaObjectViewModel {
    pub kind: ObjectKind,
    pub name: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaTreeViewModel {
    pub connection_id: i64,
    pub connection_name: Option<String>,
    pub db_type: Option<String>,
    pub database_name: Option<String>,
    pub tables: Vec<SchemaObjectViewModel>,
    pub views: Vec<SchemaObjectViewModel>,
}

impl CreateView for SchemaTreeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SchemaTreeView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectDetailsViewModel {
    pub connection_id: i64,
    pub kind: ObjectKind,
    pub name: String,
    pub columns: Vec<ColumnInfo>,
    pub indexes: Vec<IndexInfo>,
}

impl CreateView for ObjectDetailsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ObjectDetailsView::new(self, mode))
    }
}
