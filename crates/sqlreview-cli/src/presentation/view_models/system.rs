use serde::Serialize;
use sqlreview_core::UiSelectionState;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ViewMode};
use crate::presentation::views::{GuidanceView, HealthView, StateView};

#[derive(Debug, Clone, Serialize)]
pub struct HealthViewModel {
    pub server: String,
    pub status: String,
    pub healthy: bool,
    pub app_name: Option<String>,
    pub version: Option<String>,
}

impl CreateView for HealthViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(HealthView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StateViewModel {
    pub state_file: PathBuf,
    pub state: UiSelectionState,
}

impl CreateView for StateViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StateView::new(self, mode))
    }
}

/// Shown when `sqlreview` runs without a command
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub server: String,
    pub open_statement: Option<i64>,
    pub open_title: Option<String>,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView::new(self, mode))
    }
}
