use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConnectionDraftViewModel, ConnectionEntryViewModel,
    ConnectionListViewModel, ConnectionTestViewModel, Guidance, MutationViewModel, StatusBadge,
};
use sqlreview_core::Notice;
use sqlreview_sdk::Mutation;
use sqlreview_types::{ConnectionForm, ConnectionId, DatabaseConnection};

pub fn connection_list_view_model(
    connections: Vec<DatabaseConnection>,
    selected: Option<ConnectionId>,
) -> ConnectionListViewModel {
    let connections = connections
        .into_iter()
        .map(|c| ConnectionEntryViewModel {
            is_selected: Some(c.id) == selected,
            id: c.id.get(),
            name: c.name,
            db_type: c.db_type,
            host: c.host,
            port: c.port,
            database_name: c.database_name,
            username: c.username,
            description: c.description,
            created_at: c.created_at,
        })
        .collect();

    ConnectionListViewModel {
        connections,
        selected_id: selected.map(|id| id.get()),
    }
}

pub fn present_connection_list(
    connections: Option<Vec<DatabaseConnection>>,
    selected: Option<ConnectionId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ConnectionListViewModel>> {
    let content = connections.map(|list| connection_list_view_model(list, selected));
    let mut result = CommandResultViewModel::new(content).with_notices(notices);

    if let Some(list) = &result.content {
        if list.connections.is_empty() {
            result = result
                .with_badge(StatusBadge::info("No database connections"))
                .with_suggestion(
                    Guidance::new("Add a connection").with_command(cmd::CONNECTION_SAVE),
                );
        } else if result.badge.is_none() {
            let count = list.connections.len();
            result = result.with_badge(StatusBadge::success(format!("{} connection(s)", count)));
        }
    }
    result
}

pub fn present_connection_draft(
    selected: Option<ConnectionId>,
    draft: Option<&ConnectionForm>,
    notices: &[Notice],
) -> CommandResultViewModel<ConnectionDraftViewModel> {
    let content = ConnectionDraftViewModel {
        selected_id: selected.map(|id| id.get()),
        draft: draft.map(|d| d.without_secret()).unwrap_or_default(),
    };

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    if result.badge.is_none() {
        let label = match selected {
            Some(id) => format!("Editing connection {}", id),
            None => "New connection draft".to_string(),
        };
        result = result.with_badge(StatusBadge::info(label));
    }
    result.with_suggestion(
        Guidance::new("Fill in and save the draft").with_command(cmd::CONNECTION_SAVE),
    )
}

pub fn present_connection_mutation(
    mutation: Option<Mutation<Vec<DatabaseConnection>>>,
    selected: Option<ConnectionId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<MutationViewModel<ConnectionListViewModel>>> {
    let content = mutation.map(|m| MutationViewModel {
        id: m.id,
        created: m.created,
        refreshed: m
            .refreshed
            .map(|list| connection_list_view_model(list, selected)),
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

pub fn present_connection_test(
    form: &ConnectionForm,
    outcome: Option<sqlreview_types::ConnectionTestResult>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ConnectionTestViewModel>> {
    let target = match (&form.host, form.port, &form.database_name) {
        (Some(host), Some(port), Some(db)) => format!("{}:{}/{}", host, port, db),
        (Some(host), Some(port), None) => format!("{}:{}", host, port),
        (Some(host), None, _) => host.clone(),
        _ => form.name.clone(),
    };

    let content = outcome.map(|o| ConnectionTestViewModel {
        success: o.success,
        message: o.message,
        target,
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use sqlreview_types::DbType;

    fn connection(id: i64, name: &str) -> DatabaseConnection {
        DatabaseConnection {
            id: ConnectionId::new(id),
            name: name.to_string(),
            db_type: DbType::Postgresql,
            host: Some("db.local".to_string()),
            port: Some(5432),
            database_name: Some("shop".to_string()),
            username: Some("reader".to_string()),
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_list_suggests_adding_one() {
        let result = present_connection_list(Some(vec![]), None, &[]);
        assert_eq!(result.badge.as_ref().unwrap().level, StatusLevel::Info);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_selection_is_marked() {
        let result = present_connection_list(
            Some(vec![connection(1, "a"), connection(2, "b")]),
            Some(ConnectionId::new(2)),
            &[],
        );
        let list = result.content.unwrap();
        assert!(!list.connections[0].is_selected);
        assert!(list.connections[1].is_selected);
    }

    #[test]
    fn test_failed_list_keeps_the_notice() {
        let notices = vec![Notice::error("Cannot connect to http://127.0.0.1:9")];
        let result = present_connection_list(None, None, &notices);
        assert!(result.content.is_none());
        assert_eq!(result.badge.unwrap().level, StatusLevel::Error);
    }

    #[test]
    fn test_draft_never_shows_password() {
        let form = ConnectionForm {
            name: "orders".to_string(),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let result = present_connection_draft(None, Some(&form), &[]);
        assert!(result.content.draft.password.is_none());
    }
}
