use serde::Serialize;
use sqlreview_core::PageWindow;
use sqlreview_types::{StatementStatus, Timestamp};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ReportViewModel, ViewMode};
use crate::presentation::views::{
    EditorView, ExportView, ImportPreviewView, ImportResultView, OpenedStatementView,
    StatementListView, StatisticsView,
};

#[derive(Debug, Clone, Serialize)]
pub struct StatementEntryViewModel {
    pub id: i64,
    pub title: String,
    pub status: StatementStatus,
    pub sql_content: String,
    pub db_connection_id: Option<i64>,
    pub version: Option<u32>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub is_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementListViewModel {
    pub statements: Vec<StatementEntryViewModel>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    pub navigation: Option<PageWindow>,
}

impl CreateView for StatementListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatementListView::new(self, mode))
    }
}

/// The editor panel
#[derive(Debug, Clone, Serialize)]
pub struct EditorViewModel {
    /// `None` while the statement has never been saved
    pub sql_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub content: String,
    pub db_connection_id: Option<i64>,
    pub report_visible: bool,
}

impl CreateView for EditorViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(EditorView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenedStatementViewModel {
    pub editor: EditorViewModel,
    pub status: StatementStatus,
    pub version: Option<u32>,
    pub review_count: usize,
    pub report: Option<ReportViewModel>,
}

impl CreateView for OpenedStatementViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(OpenedStatementView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportPreviewViewModel {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub can_import: bool,
}

impl CreateView for ImportPreviewViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImportPreviewView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportResultViewModel {
    pub file_name: String,
    pub imported_count: u64,
    pub message: Option<String>,
    pub errors: Vec<String>,
    pub statements: Option<StatementListViewModel>,
}

impl CreateView for ImportResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImportResultView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportViewModel {
    pub path: PathBuf,
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsViewModel {
    pub total_count: u64,
    pub status_distribution: BTreeMap<String, u64>,
    pub database_distribution: BTreeMap<String, u64>,
}

impl CreateView for StatisticsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatisticsView::new(self, mode))
    }
}
