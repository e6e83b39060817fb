use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ReportViewModel, ReviewHistoryEntryViewModel,
    ReviewHistoryViewModel, SectionViewModel, StatusBadge,
};
use sqlreview_core::ScoreBand;
use sqlreview_core::review::{optimized_sql, present_sections};
use sqlreview_core::Notice;
use sqlreview_types::{ReportId, ReviewOutcome, ReviewReport, ReviewSummary, SqlId};

pub fn report_view_model(report: &ReviewReport, fallback_id: Option<ReportId>) -> ReportViewModel {
    let sections = present_sections(report)
        .into_iter()
        .map(|(section, body)| SectionViewModel {
            section,
            status: body.status,
            score: body.score,
            band: ScoreBand::from_score(body.score),
            summary: body.summary.clone(),
            details: body.details.clone(),
            suggestions: body.suggestions.clone(),
        })
        .collect();

    let llm = report.llm_info.as_ref();
    ReportViewModel {
        report_id: report.id.or(fallback_id).map(|id| id.get()),
        sql_id: report.sql_statement_id.map(|id| id.get()),
        sections,
        optimized_sql: optimized_sql(report).map(str::to_string),
        llm_provider: llm.and_then(|l| l.provider.clone()),
        llm_model: llm.and_then(|l| l.model.clone()),
        created_at: report.created_at,
    }
}

pub fn present_report(
    report: Option<ReviewReport>,
    report_id: Option<ReportId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ReportViewModel>> {
    let content = report.as_ref().map(|r| report_view_model(r, report_id));
    CommandResultViewModel::new(content).with_notices(notices)
}

pub fn present_review_outcome(
    outcome: Option<ReviewOutcome>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ReportViewModel>> {
    let content = outcome
        .as_ref()
        .map(|o| report_view_model(&o.review_result, Some(o.report_id)));

    let reviewed = content.is_some();
    let result = CommandResultViewModel::new(content).with_notices(notices);
    if reviewed {
        return result.with_suggestion(
            Guidance::new("Compare with earlier reviews").with_command(cmd::REVIEW_HISTORY),
        );
    }
    result
}

pub fn present_review_history(
    sql_id: Option<SqlId>,
    history: Option<Vec<ReviewSummary>>,
    displayed: Option<ReportId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ReviewHistoryViewModel>> {
    let content = history.map(|entries| ReviewHistoryViewModel {
        sql_id: sql_id.map(|id| id.get()),
        reports: entries
            .into_iter()
            .map(|h| ReviewHistoryEntryViewModel {
                is_displayed: Some(h.id) == displayed,
                report_id: h.id.get(),
                overall_status: h.overall_status,
                overall_score: h.overall_score,
                band: ScoreBand::from_score(h.overall_score),
                llm_provider: h.llm_provider,
                llm_model: h.llm_model,
                created_at: h.created_at,
            })
            .collect(),
    });

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    let oldest = result
        .content
        .as_ref()
        .and_then(|h| h.reports.last().map(|r| r.report_id));
    let empty = result.content.as_ref().is_some_and(|h| h.reports.is_empty());

    if empty {
        result = result.with_badge(StatusBadge::info("No reviews yet"));
    } else if let Some(oldest) = oldest {
        result = result.with_suggestion(
            Guidance::new("Open any past report").with_command(fmt::review_show(oldest)),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlreview_types::{ReportSection, SectionAssessment};

    fn section(score: f64) -> Option<SectionAssessment> {
        Some(SectionAssessment {
            score: Some(score),
            ..Default::default()
        })
    }

    #[test]
    fn test_missing_section_is_omitted_and_bands_follow_scores() {
        let report = ReviewReport {
            overall_assessment: section(80.0),
            performance: section(79.0),
            ..Default::default()
        };

        let vm = report_view_model(&report, Some(ReportId::new(3)));
        let keys: Vec<ReportSection> = vm.sections.iter().map(|s| s.section).collect();
        assert_eq!(
            keys,
            vec![ReportSection::OverallAssessment, ReportSection::Performance]
        );
        assert_eq!(vm.sections[0].band, ScoreBand::Blue);
        assert_eq!(vm.sections[1].band, ScoreBand::Orange);
        assert_eq!(vm.report_id, Some(3));
    }

    #[test]
    fn test_blank_optimized_sql_is_dropped() {
        let report = ReviewReport {
            optimized_sql: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(report_view_model(&report, None).optimized_sql.is_none());
    }

    #[test]
    fn test_empty_history_badge() {
        let result = present_review_history(Some(SqlId::new(1)), Some(vec![]), None, &[]);
        assert_eq!(result.badge.unwrap().label, "No reviews yet");
    }
}
