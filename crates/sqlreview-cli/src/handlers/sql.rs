use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use sqlreview_sdk::Controller;
use sqlreview_types::{ConnectionId, SqlId};
use std::path::{Path, PathBuf};

pub async fn list(ctrl: &mut Controller, page: Option<u32>, hctx: &HandlerContext) -> Result<()> {
    let page = page.unwrap_or(ctrl.state().current_sql_page);
    let listing = ctrl.load_sql_statements(page).await;
    let view_model =
        presenters::present_statement_list(listing, ctrl.state().current_sql_id, ctrl.notices());
    hctx.render(view_model)
}

pub fn new(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    ctrl.new_statement();
    show(ctrl, hctx)
}

pub fn show(ctrl: &Controller, hctx: &HandlerContext) -> Result<()> {
    hctx.render(presenters::present_editor(ctrl.state(), ctrl.notices()))
}

pub async fn open(ctrl: &mut Controller, id: SqlId, hctx: &HandlerContext) -> Result<()> {
    let opened = ctrl.open_statement(id).await;
    let view_model = presenters::present_opened_statement(opened, ctrl.state(), ctrl.notices());
    hctx.render(view_model)
}

/// Changes to the editor buffer; nothing is sent until `sql save`.
#[derive(Debug, Default)]
pub struct EditorChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub file: Option<PathBuf>,
    pub connection: Option<ConnectionId>,
    pub no_connection: bool,
}

pub fn edit(ctrl: &mut Controller, changes: EditorChanges, hctx: &HandlerContext) -> Result<()> {
    let content = match &changes.file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => changes.content,
    };

    let editor = &mut ctrl.state_mut().editor;
    if let Some(title) = changes.title {
        editor.title = title;
    }
    if let Some(description) = changes.description {
        editor.description = description;
    }
    if let Some(content) = content {
        editor.content = content;
    }
    if changes.no_connection {
        editor.db_connection_id = None;
    } else if changes.connection.is_some() {
        editor.db_connection_id = changes.connection;
    }

    show(ctrl, hctx)
}

pub async fn save(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    let mutation = ctrl.save_statement().await;
    let view_model =
        presenters::present_statement_mutation(mutation, ctrl.state(), ctrl.notices());
    hctx.render(view_model)
}

pub async fn delete(ctrl: &mut Controller, id: SqlId, hctx: &HandlerContext) -> Result<()> {
    let mutation = ctrl.delete_statement(id).await;
    let view_model =
        presenters::present_statement_mutation(mutation, ctrl.state(), ctrl.notices());
    hctx.render(view_model)
}

pub fn format(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    ctrl.format_editor();
    show(ctrl, hctx)
}

pub fn import_preview(ctrl: &mut Controller, file: &Path, hctx: &HandlerContext) -> Result<()> {
    let (file_name, content) = read_upload(file)?;
    let dialog = ctrl.preview_csv(&file_name, &String::from_utf8_lossy(&content));
    hctx.render(presenters::present_import_preview(&dialog, ctrl.notices()))
}

pub async fn import(
    ctrl: &mut Controller,
    file: &Path,
    connection: Option<ConnectionId>,
    hctx: &HandlerContext,
) -> Result<()> {
    let (file_name, content) = read_upload(file)?;
    let outcome = ctrl.import_csv(&file_name, content, connection).await;
    let view_model = presenters::present_import_result(
        &file_name,
        outcome,
        ctrl.state().current_sql_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

pub async fn export(
    ctrl: &mut Controller,
    dir: Option<PathBuf>,
    hctx: &HandlerContext,
) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };
    let path = ctrl.export_csv(&dir).await;
    hctx.render(presenters::present_export(path, ctrl.notices()))
}

pub async fn stats(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    let stats = ctrl.statement_statistics().await;
    hctx.render(presenters::present_statistics(stats, ctrl.notices()))
}

fn read_upload(file: &Path) -> Result<(String, Vec<u8>)> {
    let content =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    Ok((file_name, content))
}
