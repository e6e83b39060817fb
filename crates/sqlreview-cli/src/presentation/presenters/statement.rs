use crate::args::hints::{cmd, fmt};
use crate::presentation::presenters::report_view_model;
use crate::presentation::view_models::{
    CommandResultViewModel, EditorViewModel, ExportViewModel, Guidance, ImportPreviewViewModel,
    ImportResultViewModel, MutationViewModel, OpenedStatementViewModel, StatementEntryViewModel,
    StatementListViewModel, StatisticsViewModel, StatusBadge,
};
use sqlreview_core::{ImportDialog, Notice, UiSelectionState};
use sqlreview_sdk::{ImportOutcome, Mutation, OpenedStatement, StatementListing};
use sqlreview_types::{SqlId, StatementStatistics};
use std::path::PathBuf;

pub fn statement_list_view_model(
    listing: StatementListing,
    open: Option<SqlId>,
) -> StatementListViewModel {
    let page = listing.page;
    let statements = page
        .items
        .into_iter()
        .map(|s| StatementEntryViewModel {
            id: s.id.get(),
            title: s.display_title(),
            is_open: Some(s.id) == open,
            status: s.status,
            sql_content: s.sql_content.unwrap_or_default(),
            db_connection_id: s.db_connection_id.map(|id| id.get()),
            version: s.version,
            created_at: s.created_at,
            updated_at: s.updated_at,
        })
        .collect();

    StatementListViewModel {
        statements,
        page: page.page,
        pages: page.pages,
        total: page.total,
        navigation: listing.navigation,
    }
}

pub fn present_statement_list(
    listing: Option<StatementListing>,
    open: Option<SqlId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<StatementListViewModel>> {
    let content = listing.map(|l| statement_list_view_model(l, open));
    let mut result = CommandResultViewModel::new(content).with_notices(notices);

    if let Some(list) = &result.content {
        if list.statements.is_empty() {
            result = result
                .with_badge(StatusBadge::info("No SQL statements"))
                .with_suggestion(
                    Guidance::new("Write a new statement").with_command(cmd::SQL_EDIT),
                )
                .with_suggestion(
                    Guidance::new("Or import some from CSV").with_command(cmd::SQL_IMPORT_PREVIEW),
                );
        } else {
            let badge = StatusBadge::success(format!(
                "Page {} of {} ({} statements)",
                list.page,
                list.pages.max(1),
                list.total
            ));
            let next = list.navigation.as_ref().and_then(|nav| nav.next);
            if result.badge.is_none() {
                result = result.with_badge(badge);
            }
            if let Some(next) = next {
                result = result.with_suggestion(
                    Guidance::new("Next page").with_command(fmt::sql_list_page(next)),
                );
            }
        }
    }
    result
}

pub fn editor_view_model(state: &UiSelectionState) -> EditorViewModel {
    EditorViewModel {
        sql_id: state.current_sql_id.map(|id| id.get()),
        title: state.editor.title.clone(),
        description: state.editor.description.clone(),
        content: state.editor.content.clone(),
        db_connection_id: state.editor.db_connection_id.map(|id| id.get()),
        report_visible: state.report_visible(),
    }
}

pub fn present_editor(
    state: &UiSelectionState,
    notices: &[Notice],
) -> CommandResultViewModel<EditorViewModel> {
    let content = editor_view_model(state);
    let unsaved = content.sql_id.is_none();
    let empty = state.editor.is_empty();

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    if empty {
        result = result.with_suggestion(
            Guidance::new("Put a statement in the editor").with_command(cmd::SQL_EDIT),
        );
    } else if unsaved {
        result = result.with_suggestion(
            Guidance::new("Save it before reviewing").with_command(cmd::SQL_SAVE),
        );
    }
    result
}

pub fn present_opened_statement(
    opened: Option<OpenedStatement>,
    state: &UiSelectionState,
    notices: &[Notice],
) -> CommandResultViewModel<Option<OpenedStatementViewModel>> {
    let content = opened.map(|o| OpenedStatementViewModel {
        editor: editor_view_model(state),
        status: o.statement.status,
        version: o.statement.version,
        review_count: o.history.len(),
        report: o
            .report
            .as_ref()
            .map(|r| report_view_model(r, o.history.first().map(|h| h.id))),
    });

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    if let Some(opened) = &result.content {
        let title = opened.editor.title.clone();
        let no_report = opened.report.is_none();
        if result.badge.is_none() {
            result = result.with_badge(StatusBadge::success(format!("Opened '{}'", title)));
        }
        if no_report {
            result = result.with_suggestion(
                Guidance::new("Not reviewed yet").with_command(cmd::REVIEW_RUN),
            );
        }
        result = result.with_suggestion(
            Guidance::new("Browse earlier versions").with_command(cmd::VERSION_LIST),
        );
    }
    result
}

pub fn present_statement_mutation(
    mutation: Option<Mutation<StatementListing>>,
    state: &UiSelectionState,
    notices: &[Notice],
) -> CommandResultViewModel<Option<MutationViewModel<StatementListViewModel>>> {
    let content = mutation.map(|m| MutationViewModel {
        id: m.id,
        created: m.created,
        refreshed: m
            .refreshed
            .map(|l| statement_list_view_model(l, state.current_sql_id)),
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

pub fn present_import_preview(
    dialog: &ImportDialog,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ImportPreviewViewModel>> {
    let content = match dialog {
        ImportDialog::Ready { file_name, preview } => Some(ImportPreviewViewModel {
            file_name: file_name.clone(),
            headers: preview.headers.clone(),
            rows: preview.rows.clone(),
            can_import: dialog.can_import(),
        }),
        ImportDialog::Invalid { .. } => None,
    };

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    if let ImportDialog::Ready { file_name, .. } = dialog {
        if result.badge.is_none() {
            result = result.with_badge(StatusBadge::info(format!("Preview of {}", file_name)));
        }
        result = result.with_suggestion(
            Guidance::new("Import the whole file")
                .with_command(format!("sqlreview sql import {}", file_name)),
        );
    }
    result
}

pub fn present_import_result(
    file_name: &str,
    outcome: Option<ImportOutcome>,
    open: Option<SqlId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ImportResultViewModel>> {
    let content = outcome.map(|o| ImportResultViewModel {
        file_name: file_name.to_string(),
        imported_count: o.result.imported_count,
        message: o.result.message,
        errors: o.result.errors,
        statements: o.refreshed.map(|l| statement_list_view_model(l, open)),
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

pub fn present_export(
    path: Option<PathBuf>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ExportViewModel>> {
    CommandResultViewModel::new(path.map(|path| ExportViewModel { path })).with_notices(notices)
}

pub fn present_statistics(
    stats: Option<StatementStatistics>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<StatisticsViewModel>> {
    let content = stats.map(|s| StatisticsViewModel {
        total_count: s.total_count,
        status_distribution: s.status_distribution,
        database_distribution: s.database_distribution,
    });
    CommandResultViewModel::new(content).with_notices(notices)
}
