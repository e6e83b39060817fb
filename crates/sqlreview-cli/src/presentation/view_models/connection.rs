use serde::Serialize;
use sqlreview_types::{ConnectionForm, DbType, Timestamp};
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::{ConnectionDraftView, ConnectionListView, ConnectionTestView};

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionEntryViewModel {
    pub id: i64,
    pub name: String,
    pub db_type: DbType,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_name: Option<String>,
    pub username: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<Timestamp>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionListViewModel {
    pub connections: Vec<ConnectionEntryViewModel>,
    pub selected_id: Option<i64>,
}

impl CreateView for ConnectionListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConnectionListView::new(self, mode))
    }
}

/// The connection form: which record it edits (if any) and its fields
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionDraftViewModel {
    pub selected_id: Option<i64>,
    pub draft: ConnectionForm,
}

impl CreateView for ConnectionDraftViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConnectionDraftView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionTestViewModel {
    pub success: bool,
    pub message: Option<String>,
    pub target: String,
}

impl CreateView for ConnectionTestViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConnectionTestView::new(self, mode))
    }
}
