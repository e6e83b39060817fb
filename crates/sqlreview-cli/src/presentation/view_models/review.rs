use serde::Serialize;
use sqlreview_core::ScoreBand;
use sqlreview_types::{ReportSection, ReviewStatus, Timestamp};
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::{ReportView, ReviewHistoryView};

#[derive(Debug, Clone, Serialize)]
pub struct SectionViewModel {
    pub section: ReportSection,
    pub status: Option<ReviewStatus>,
    pub score: Option<f64>,
    pub band: ScoreBand,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub suggestions: Option<String>,
}

/// A review report; sections appear in render order and only when present.
#[derive(Debug, Clone, Serialize)]
pub struct ReportViewModel {
    pub report_id: Option<i64>,
    pub sql_id: Option<i64>,
    pub sections: Vec<SectionViewModel>,
    pub optimized_sql: Option<String>,
    pub llm_provider: Option<String>,
    pub llm_model: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl CreateView for ReportViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ReportView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewHistoryEntryViewModel {
    pub report_id: i64,
    pub overall_status: Option<ReviewStatus>,
    pub overall_score: Option<f64>,
    pub band: ScoreBand,
    pub llm_provider: Option<String>,
    pub llm_model: Option<String>,
    pub created_at: Option<Timestamp>,
    pub is_displayed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewHistoryViewModel {
    pub sql_id: Option<i64>,
    pub reports: Vec<ReviewHistoryEntryViewModel>,
}

impl CreateView for ReviewHistoryViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ReviewHistoryView::new(self, mode))
    }
}
