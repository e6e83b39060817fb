use sqlreview_core::Notice;
use sqlreview_types::{LlmConfigId, ReportId, ReviewOutcome, ReviewReport, ReviewSummary, SqlId};

use super::Controller;
use crate::error::Error;

impl Controller {
    /// Reviews the statement open in the editor.
    ///
    /// The statement must be saved first. Without an explicit model the
    /// service's default config is used.
    pub async fn review_current(
        &mut self,
        llm_config_id: Option<LlmConfigId>,
    ) -> Option<ReviewOutcome> {
        let sql_id = self.current_sql()?;
        if let Err(err) = self.state.review.begin(sql_id) {
            return self.fail(err.into());
        }

        let model = self.review_model(llm_config_id).await;
        tracing::info!(sql_id = %sql_id, model = ?model, "starting review");

        match self.client.reviews().review(sql_id, model).await {
            Ok(outcome) => {
                if let Err(err) = self.state.review.complete(sql_id, outcome.report_id) {
                    return self.fail(err.into());
                }
                self.state.current_report_id = Some(outcome.report_id);
                self.notify(Notice::success("Review completed"));
                Some(outcome)
            }
            Err(err) => {
                self.state.review.fail(sql_id);
                self.fail(err)
            }
        }
    }

    /// Past reports of the open statement, newest first.
    pub async fn review_history(&mut self) -> Option<Vec<ReviewSummary>> {
        let sql_id = self.current_sql()?;
        let result = self.client.reviews().history(sql_id).await;
        self.settle(result)
    }

    /// Fetches a stored report. Only a report of the statement open in the
    /// editor goes into the report panel; others are returned as-is.
    pub async fn open_report(&mut self, id: ReportId) -> Option<ReviewReport> {
        let result = self.client.reviews().report(id).await;
        let report = self.settle(result)?;

        let current = self.state.current_sql_id;
        match (report.sql_statement_id, current) {
            (Some(owner), Some(open)) if owner != open => {
                self.notify(Notice::info(format!(
                    "Report {} belongs to statement {}; the report panel is unchanged",
                    id, owner
                )));
            }
            (_, Some(open)) => self.state.show_report(open, Some(id)),
            (owner, None) => {
                let owner = owner
                    .map(|o| o.to_string())
                    .unwrap_or_else(|| "-".to_string());
                self.notify(Notice::info(format!(
                    "Report {} belongs to statement {}; open it to show the report",
                    id, owner
                )));
            }
        }
        Some(report)
    }

    /// The report panel's current contents, re-read from the service.
    pub async fn current_report(&mut self) -> Option<ReviewReport> {
        let Some(id) = self.state.current_report_id else {
            self.notify(Notice::info("No review report is open"));
            return None;
        };
        let result = self.client.reviews().report(id).await;
        self.settle(result)
    }

    pub fn hide_report(&mut self) {
        self.state.hide_report();
    }

    /// The open statement, or a warning when the editor holds an unsaved one.
    pub(super) fn current_sql(&mut self) -> Option<SqlId> {
        match self.state.current_sql_id {
            Some(id) => Some(id),
            None => self.fail(Error::InvalidState(
                "Save the SQL statement first".to_string(),
            )),
        }
    }
}
