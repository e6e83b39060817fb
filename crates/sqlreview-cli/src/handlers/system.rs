use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use sqlreview_core::Notice;
use sqlreview_sdk::Controller;

pub async fn health(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    let status = ctrl.health().await;
    let server = ctrl.client().base_url().to_string();
    hctx.render(presenters::present_health(&server, status, ctrl.notices()))
}

pub fn state_show(ctx: &ExecutionContext, hctx: &HandlerContext) -> Result<()> {
    let state = ctx.load_state()?;
    hctx.render(presenters::present_state(ctx.state_path(), state, &[]))
}

pub fn state_reset(ctx: &ExecutionContext, hctx: &HandlerContext) -> Result<()> {
    let state = ctx.reset_state()?;
    let notices = [Notice::success("Selection state reset")];
    hctx.render(presenters::present_state(ctx.state_path(), state, &notices))
}

pub fn guidance(ctx: &ExecutionContext, hctx: &HandlerContext) -> Result<()> {
    let state = ctx.load_state().unwrap_or_else(|err| {
        tracing::warn!("ignoring saved state: {:#}", err);
        Default::default()
    });
    hctx.render(presenters::present_guidance(ctx.server_url()?, &state))
}
