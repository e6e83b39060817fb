use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, EmptyViewModel, Guidance, GuidanceViewModel, HealthViewModel,
    StateViewModel, StatusBadge,
};
use sqlreview_core::{Notice, UiSelectionState};
use sqlreview_types::HealthStatus;
use std::path::PathBuf;

pub fn present_health(
    server: &str,
    status: Option<HealthStatus>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<HealthViewModel>> {
    let content = status.map(|s| HealthViewModel {
        server: server.to_string(),
        healthy: s.is_healthy(),
        status: s.status,
        app_name: s.app_name,
        version: s.version,
    });

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    if result.badge.is_none() && result.content.is_some() {
        result = result.with_badge(StatusBadge::success("Service is up"));
    }
    result
}

/// Actions that only touch the saved selection (hide, close, new)
pub fn present_local_change(
    done: &str,
    notices: &[Notice],
) -> CommandResultViewModel<EmptyViewModel> {
    let mut result = CommandResultViewModel::new(EmptyViewModel {}).with_notices(notices);
    if result.badge.is_none() {
        result = result.with_badge(StatusBadge::info(done));
    }
    result
}

pub fn present_state(
    state_file: PathBuf,
    state: UiSelectionState,
    notices: &[Notice],
) -> CommandResultViewModel<StateViewModel> {
    CommandResultViewModel::new(StateViewModel { state_file, state })
        .with_notices(notices)
        .with_suggestion(Guidance::new("Start over").with_command(cmd::STATE_RESET))
}

pub fn present_guidance(
    server: String,
    state: &UiSelectionState,
) -> CommandResultViewModel<GuidanceViewModel> {
    let open_title = state
        .current_sql_id
        .map(|_| state.editor.title.clone())
        .filter(|t| !t.is_empty());

    let content = GuidanceViewModel {
        server,
        open_statement: state.current_sql_id.map(|id| id.get()),
        open_title,
    };

    let mut suggestions = vec![
        Guidance::new("Check the service").with_command(cmd::HEALTH),
        Guidance::new("List saved statements").with_command(cmd::SQL_LIST),
    ];
    match state.current_sql_id {
        Some(id) => {
            suggestions
                .push(Guidance::new("Review the open statement").with_command(cmd::REVIEW_RUN));
            suggestions.push(Guidance::new("Reload it").with_command(fmt::sql_open(id)));
        }
        None => {
            suggestions.push(Guidance::new("Start a new statement").with_command(cmd::SQL_NEW));
            suggestions.push(Guidance::new("Open one").with_command(cmd::SQL_OPEN));
        }
    }
    suggestions.push(Guidance::new("Configure models").with_command(cmd::LLM_LIST));
    suggestions.push(Guidance::new("Configure databases").with_command(cmd::CONNECTION_LIST));

    CommandResultViewModel::new(content).with_suggestions(suggestions)
}
