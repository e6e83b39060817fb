use super::HandlerContext;
use crate::args::ConnectionFields;
use crate::presentation::presenters;
use anyhow::Result;
use sqlreview_sdk::Controller;
use sqlreview_types::{ConnectionForm, ConnectionId};

pub async fn list(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    let connections = ctrl.list_connections().await;
    let view_model = presenters::present_connection_list(
        connections,
        ctrl.state().current_connection_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

pub fn new(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    ctrl.new_connection();
    render_draft(ctrl, hctx)
}

pub async fn edit(ctrl: &mut Controller, id: ConnectionId, hctx: &HandlerContext) -> Result<()> {
    if ctrl.edit_connection(id).await.is_none() {
        return hctx.render(presenters::present_connection_list(
            None,
            ctrl.state().current_connection_id,
            ctrl.notices(),
        ));
    }
    render_draft(ctrl, hctx)
}

pub async fn save(
    ctrl: &mut Controller,
    fields: ConnectionFields,
    hctx: &HandlerContext,
) -> Result<()> {
    let form = merge_fields(ctrl.state().connection_draft.as_ref(), fields);
    let mutation = ctrl.save_connection(&form).await;
    let view_model = presenters::present_connection_mutation(
        mutation,
        ctrl.state().current_connection_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

pub async fn test(
    ctrl: &mut Controller,
    fields: ConnectionFields,
    hctx: &HandlerContext,
) -> Result<()> {
    let form = merge_fields(ctrl.state().connection_draft.as_ref(), fields);
    let outcome = ctrl.test_connection(&form).await;
    let view_model = presenters::present_connection_test(&form, outcome, ctrl.notices());
    hctx.render(view_model)
}

pub async fn delete(ctrl: &mut Controller, id: ConnectionId, hctx: &HandlerContext) -> Result<()> {
    let mutation = ctrl.delete_connection(id).await;
    let view_model = presenters::present_connection_mutation(
        mutation,
        ctrl.state().current_connection_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

fn render_draft(ctrl: &Controller, hctx: &HandlerContext) -> Result<()> {
    let state = ctrl.state();
    let view_model = presenters::present_connection_draft(
        state.current_connection_id,
        state.connection_draft.as_ref(),
        ctrl.notices(),
    );
    hctx.render(view_model)
}

/// Flags override the saved draft field by field. The password only ever
/// comes from the flag.
fn merge_fields(draft: Option<&ConnectionForm>, fields: ConnectionFields) -> ConnectionForm {
    let mut form = draft.map(ConnectionForm::without_secret).unwrap_or_default();
    if let Some(name) = fields.name {
        form.name = name;
    }
    if fields.db_type.is_some() {
        form.db_type = fields.db_type;
    }
    if fields.host.is_some() {
        form.host = fields.host;
    }
    if fields.port.is_some() {
        form.port = fields.port;
    }
    if fields.database_name.is_some() {
        form.database_name = fields.database_name;
    }
    if fields.username.is_some() {
        form.username = fields.username;
    }
    if fields.description.is_some() {
        form.description = fields.description;
    }
    form.password = fields.password;
    form
}
