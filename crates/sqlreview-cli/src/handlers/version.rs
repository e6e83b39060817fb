use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use sqlreview_sdk::Controller;
use sqlreview_types::VersionId;

pub async fn list(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    let entries = ctrl.list_versions().await;
    let view_model = presenters::present_version_list(entries, ctrl.state(), ctrl.notices());
    hctx.render(view_model)
}

pub async fn view(ctrl: &mut Controller, id: VersionId, hctx: &HandlerContext) -> Result<()> {
    let version = ctrl.view_version(id).await;
    hctx.render(presenters::present_version_detail(version, ctrl.notices()))
}

pub async fn compare(ctrl: &mut Controller, id: VersionId, hctx: &HandlerContext) -> Result<()> {
    let diff = ctrl.compare_version(id).await;
    hctx.render(presenters::present_version_diff(diff, ctrl.notices()))
}

pub async fn select(ctrl: &mut Controller, id: VersionId, hctx: &HandlerContext) -> Result<()> {
    let entry = ctrl.select_version(id).await;
    let view_model = presenters::present_version_selection(entry, ctrl.state(), ctrl.notices());
    hctx.render(view_model)
}

/// `--version` selects first; a failed selection stops before any prompt.
pub async fn restore(
    ctrl: &mut Controller,
    version: Option<VersionId>,
    hctx: &HandlerContext,
) -> Result<()> {
    let selected = match version {
        Some(id) => ctrl.select_version(id).await.is_some(),
        None => true,
    };
    let outcome = if selected {
        ctrl.restore_version().await
    } else {
        None
    };
    let view_model = presenters::present_restore(outcome, ctrl.state(), ctrl.notices());
    hctx.render(view_model)
}

pub fn close(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    ctrl.close_versions();
    hctx.render(presenters::present_local_change("Version panel closed", ctrl.notices()))
}
