use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use sqlreview_sdk::Controller;
use sqlreview_types::{ConnectionId, ObjectKind};

pub async fn tree(
    ctrl: &mut Controller,
    connection: Option<ConnectionId>,
    hctx: &HandlerContext,
) -> Result<()> {
    let schema = ctrl.schema_tree(connection).await;
    let connection = connection.or(ctrl.state().editor.db_connection_id);
    hctx.render(presenters::present_schema_tree(connection, schema, ctrl.notices()))
}

pub async fn object(
    ctrl: &mut Controller,
    kind: ObjectKind,
    name: &str,
    connection: Option<ConnectionId>,
    hctx: &HandlerContext,
) -> Result<()> {
    let details = ctrl.object_details(connection, kind, name).await;
    let connection = connection.or(ctrl.state().editor.db_connection_id);
    let view_model = presenters::present_object_details(connection, kind, details, ctrl.notices());
    hctx.render(view_model)
}
