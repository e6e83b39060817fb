use serde::Serialize;
use sqlreview_core::versions::DiffLine;
use sqlreview_types::Timestamp;
use std::fmt;

use super::{CreateView, EditorViewModel, ViewMode};
use crate::presentation::views::{
    RestoreView, VersionDetailView, VersionDiffView, VersionListView,
};

#[derive(Debug, Clone, Serialize)]
pub struct VersionEntryViewModel {
    pub id: i64,
    pub version: u32,
    pub title: Option<String>,
    pub sql_content: Option<String>,
    pub created_at: Option<Timestamp>,
    pub is_newest: bool,
    pub is_current: bool,
    pub compare_with: Option<i64>,
    pub can_restore: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionListViewModel {
    pub sql_id: Option<i64>,
    pub versions: Vec<VersionEntryViewModel>,
    pub selected_id: Option<i64>,
}

impl CreateView for VersionListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(VersionListView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionDetailViewModel {
    pub id: i64,
    pub version: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sql_content: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl CreateView for VersionDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(VersionDetailView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionDiffViewModel {
    pub older_id: i64,
    pub older_version: u32,
    pub newer_id: i64,
    pub newer_version: u32,
    pub identical: bool,
    pub lines: Vec<DiffLine>,
}

impl CreateView for VersionDiffViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(VersionDiffView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RestoreViewModel {
    pub version_id: i64,
    /// Editor as reloaded from the service
    pub editor: Option<EditorViewModel>,
}

impl CreateView for RestoreViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(RestoreView::new(self, mode))
    }
}
