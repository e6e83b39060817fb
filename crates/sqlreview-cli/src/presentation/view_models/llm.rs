use serde::Serialize;
use sqlreview_types::{LlmConfigForm, LlmProvider};
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::{LlmDraftView, LlmListView, LlmTestView};

#[derive(Debug, Clone, Serialize)]
pub struct LlmConfigEntryViewModel {
    pub id: i64,
    pub name: String,
    pub provider: LlmProvider,
    pub model_name: String,
    pub base_url: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub description: Option<String>,
    pub is_default: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LlmConfigListViewModel {
    pub configs: Vec<LlmConfigEntryViewModel>,
    /// Only ever the server's flag
    pub default_id: Option<i64>,
    pub selected_id: Option<i64>,
}

impl CreateView for LlmConfigListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LlmListView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LlmDraftViewModel {
    pub selected_id: Option<i64>,
    pub draft: LlmConfigForm,
}

impl CreateView for LlmDraftViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LlmDraftView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LlmTestViewModel {
    pub id: i64,
    pub success: bool,
    pub message: Option<String>,
}

impl CreateView for LlmTestViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LlmTestView::new(self, mode))
    }
}
