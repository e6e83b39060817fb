use serde::{Deserialize, Serialize};
use sqlreview_types::{
    ReportId, ReportSection, ReviewReport, ReviewStatus, SectionAssessment, SqlId,
};

use crate::error::{Error, Result};

/// Review lifecycle of the statement open in the editor.
///
/// ```text
/// Idle --begin--> Pending --complete--> Displayed
///                    \------fail------> Idle
/// ```
///
/// `show` moves straight to `Displayed` when a stored report is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReviewWorkflow {
    #[default]
    Idle,
    Pending {
        sql_id: SqlId,
    },
    Displayed {
        sql_id: SqlId,
        report_id: Option<ReportId>,
    },
}

impl ReviewWorkflow {
    pub fn begin(&mut self, sql_id: SqlId) -> Result<()> {
        if self.is_pending_for(sql_id) {
            return Err(Error::InvalidState(format!(
                "A review of SQL {} is already in progress",
                sql_id
            )));
        }
        *self = ReviewWorkflow::Pending { sql_id };
        Ok(())
    }

    pub fn complete(&mut self, sql_id: SqlId, report_id: ReportId) -> Result<()> {
        if !self.is_pending_for(sql_id) {
            return Err(Error::InvalidState(format!(
                "No review of SQL {} is in progress",
                sql_id
            )));
        }
        *self = ReviewWorkflow::Displayed {
            sql_id,
            report_id: Some(report_id),
        };
        Ok(())
    }

    /// Failed review returns to `Idle`; a pending review of another statement is left alone.
    pub fn fail(&mut self, sql_id: SqlId) {
        if self.is_pending_for(sql_id) {
            *self = ReviewWorkflow::Idle;
        }
    }

    pub fn show(&mut self, sql_id: SqlId, report_id: Option<ReportId>) {
        *self = ReviewWorkflow::Displayed { sql_id, report_id };
    }

    pub fn reset(&mut self) {
        *self = ReviewWorkflow::Idle;
    }

    /// A review left pending by an interrupted action never completes.
    pub fn settle(&mut self) {
        if matches!(self, ReviewWorkflow::Pending { .. }) {
            *self = ReviewWorkflow::Idle;
        }
    }

    pub fn is_pending_for(&self, sql_id: SqlId) -> bool {
        matches!(self, ReviewWorkflow::Pending { sql_id: pending } if *pending == sql_id)
    }

    pub fn is_displayed(&self) -> bool {
        matches!(self, ReviewWorkflow::Displayed { .. })
    }

    pub fn displayed_report(&self) -> Option<ReportId> {
        match self {
            ReviewWorkflow::Displayed { report_id, .. } => *report_id,
            _ => None,
        }
    }
}

/// Color band of a section score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Green,
    Blue,
    Orange,
    Red,
}

impl ScoreBand {
    /// Missing scores count as 0.
    pub fn from_score(score: Option<f64>) -> Self {
        let score = score.unwrap_or(0.0);
        if score >= 90.0 {
            ScoreBand::Green
        } else if score >= 80.0 {
            ScoreBand::Blue
        } else if score >= 60.0 {
            ScoreBand::Orange
        } else {
            ScoreBand::Red
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            ScoreBand::Green => "#198754",
            ScoreBand::Blue => "#0d6efd",
            ScoreBand::Orange => "#fd7e14",
            ScoreBand::Red => "#dc3545",
        }
    }
}

pub fn status_label(status: Option<ReviewStatus>) -> &'static str {
    match status.unwrap_or_default() {
        ReviewStatus::Excellent => "Excellent",
        ReviewStatus::Good => "Good",
        ReviewStatus::NeedsImprovement => "Needs improvement",
        ReviewStatus::HasIssues => "Has issues",
        ReviewStatus::Unknown => "Unknown",
    }
}

pub fn section_title(section: ReportSection) -> &'static str {
    match section {
        ReportSection::OverallAssessment => "Overall assessment",
        ReportSection::Consistency => "Consistency",
        ReportSection::Conventions => "SQL conventions",
        ReportSection::Performance => "Performance",
        ReportSection::Security => "Security",
        ReportSection::Readability => "Readability",
        ReportSection::Maintainability => "Maintainability",
    }
}

/// Sections present in the report, in render order
pub fn present_sections(report: &ReviewReport) -> Vec<(ReportSection, &SectionAssessment)> {
    ReportSection::ORDERED
        .iter()
        .filter_map(|section| report.section(*section).map(|body| (*section, body)))
        .collect()
}

/// Optimized SQL, if the report carries a non-blank one
pub fn optimized_sql(report: &ReviewReport) -> Option<&str> {
    report
        .optimized_sql
        .as_deref()
        .filter(|sql| !sql.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(id: i64) -> SqlId {
        SqlId::new(id)
    }

    #[test]
    fn test_begin_refuses_while_pending_for_same_statement() {
        let mut workflow = ReviewWorkflow::default();
        workflow.begin(sql(1)).unwrap();
        assert!(workflow.begin(sql(1)).is_err());
        assert!(workflow.is_pending_for(sql(1)));
    }

    #[test]
    fn test_complete_and_fail() {
        let mut workflow = ReviewWorkflow::default();
        workflow.begin(sql(3)).unwrap();
        workflow.complete(sql(3), ReportId::new(40)).unwrap();
        assert_eq!(workflow.displayed_report(), Some(ReportId::new(40)));

        workflow.begin(sql(3)).unwrap();
        workflow.fail(sql(3));
        assert_eq!(workflow, ReviewWorkflow::Idle);
    }

    #[test]
    fn test_complete_requires_pending() {
        let mut workflow = ReviewWorkflow::default();
        assert!(workflow.complete(sql(1), ReportId::new(1)).is_err());
    }

    #[test]
    fn test_settle_drops_stale_pending() {
        let mut workflow = ReviewWorkflow::Pending { sql_id: sql(9) };
        workflow.settle();
        assert_eq!(workflow, ReviewWorkflow::Idle);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(Some(95.0)), ScoreBand::Green);
        assert_eq!(ScoreBand::from_score(Some(90.0)), ScoreBand::Green);
        assert_eq!(ScoreBand::from_score(Some(80.0)), ScoreBand::Blue);
        assert_eq!(ScoreBand::from_score(Some(79.0)), ScoreBand::Orange);
        assert_eq!(ScoreBand::from_score(Some(60.0)), ScoreBand::Orange);
        assert_eq!(ScoreBand::from_score(Some(59.9)), ScoreBand::Red);
        assert_eq!(ScoreBand::from_score(None), ScoreBand::Red);
    }

    #[test]
    fn test_missing_section_is_skipped() {
        let report: ReviewReport = serde_json::from_value(serde_json::json!({
            "overall_assessment": {"status": "good", "score": 80},
            "performance": {"status": "needs_improvement", "score": 79},
            "maintainability": {"status": "excellent", "score": 93}
        }))
        .unwrap();

        let sections: Vec<ReportSection> =
            present_sections(&report).into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            sections,
            vec![
                ReportSection::OverallAssessment,
                ReportSection::Performance,
                ReportSection::Maintainability
            ]
        );
        assert!(!sections.contains(&ReportSection::Security));
    }

    #[test]
    fn test_blank_optimized_sql_is_hidden() {
        let mut report = ReviewReport::default();
        assert_eq!(optimized_sql(&report), None);
        report.optimized_sql = Some("  \n".to_string());
        assert_eq!(optimized_sql(&report), None);
        report.optimized_sql = Some("SELECT 1".to_string());
        assert_eq!(optimized_sql(&report), Some("SELECT 1"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(Some(ReviewStatus::NeedsImprovement)), "Needs improvement");
        assert_eq!(status_label(None), "Unknown");
    }
}
