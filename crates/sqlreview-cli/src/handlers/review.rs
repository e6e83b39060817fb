use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use sqlreview_sdk::Controller;
use sqlreview_types::{LlmConfigId, ReportId};

pub async fn run(
    ctrl: &mut Controller,
    llm: Option<LlmConfigId>,
    hctx: &HandlerContext,
) -> Result<()> {
    tracing::debug!(?llm, "requesting review");
    let outcome = ctrl.review_current(llm).await;
    hctx.render(presenters::present_review_outcome(outcome, ctrl.notices()))
}

pub async fn history(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    let history = ctrl.review_history().await;
    let state = ctrl.state();
    let view_model = presenters::present_review_history(
        state.current_sql_id,
        history,
        state.current_report_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

pub async fn show(
    ctrl: &mut Controller,
    report: Option<ReportId>,
    hctx: &HandlerContext,
) -> Result<()> {
    let loaded = match report {
        Some(id) => ctrl.open_report(id).await,
        None => ctrl.current_report().await,
    };
    let report_id = report.or(ctrl.state().current_report_id);
    hctx.render(presenters::present_report(loaded, report_id, ctrl.notices()))
}

pub fn hide(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    ctrl.hide_report();
    hctx.render(presenters::present_local_change("Report hidden", ctrl.notices()))
}
