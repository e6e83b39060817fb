use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ObjectDetailsViewModel, SchemaObjectViewModel,
    SchemaTreeViewModel, StatusBadge,
};
use sqlreview_core::Notice;
use sqlreview_types::{ConnectionId, DatabaseSchema, ObjectDetails, ObjectKind, SchemaObject};

fn objects(kind: ObjectKind, items: Vec<SchemaObject>) -> Vec<SchemaObjectViewModel> {
    items
        .into_iter()
        .map(|o| SchemaObjectViewModel {
            kind,
            name: o.name,
            comment: o.comment.filter(|c| !c.is_empty()),
        })
        .collect()
}

pub fn present_schema_tree(
    connection: Option<ConnectionId>,
    schema: Option<DatabaseSchema>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<SchemaTreeViewModel>> {
    let content = match (connection, schema) {
        (Some(id), Some(schema)) => {
            let info = schema.connection_info;
            Some(SchemaTreeViewModel {
                connection_id: id.get(),
                connection_name: info.as_ref().map(|i| i.name.clone()),
                db_type: info.as_ref().map(|i| i.db_type.clone()),
                database_name: info.and_then(|i| i.database_name),
                tables: objects(ObjectKind::Table, schema.tables),
                views: objects(ObjectKind::View, schema.views),
            })
        }
        _ => None,
    };

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    if connection.is_none() {
        return result.with_suggestion(
            Guidance::new("Pick a connection explicitly").with_command(cmd::SCHEMA_TREE),
        );
    }

    let first = result.content.as_ref().and_then(|tree| {
        tree.tables
            .first()
            .or_else(|| tree.views.first())
            .map(|o| (o.kind, o.name.clone()))
    });
    let empty = result
        .content
        .as_ref()
        .is_some_and(|tree| tree.tables.is_empty() && tree.views.is_empty());

    if empty && result.badge.is_none() {
        result = result.with_badge(StatusBadge::info("No tables or views"));
    }
    if let Some((kind, name)) = first {
        result = result.with_suggestion(
            Guidance::new("Inspect columns and indexes")
                .with_command(fmt::schema_object(kind, &name)),
        );
    }
    result
}

pub fn present_object_details(
    connection: Option<ConnectionId>,
    kind: ObjectKind,
    details: Option<ObjectDetails>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<ObjectDetailsViewModel>> {
    let content = match (connection, details) {
        (Some(id), Some(details)) => Some(ObjectDetailsViewModel {
            connection_id: id.get(),
            kind,
            name: details.name,
            columns: details.columns,
            indexes: details.indexes,
        }),
        _ => None,
    };
    CommandResultViewModel::new(content).with_notices(notices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_connection_gives_hint_and_suggestion() {
        let notices = vec![Notice::info("Select a database connection to browse its schema")];
        let result = present_schema_tree(None, None, &notices);
        assert!(result.content.is_none());
        assert_eq!(result.suggestions.len(), 1);
        assert!(!result.is_failure());
    }

    #[test]
    fn test_first_object_is_suggested() {
        let schema: DatabaseSchema = serde_json::from_value(serde_json::json!({
            "tables": [{"name": "orders", "comment": ""}],
            "views": [{"name": "daily_totals"}]
        }))
        .unwrap();

        let result = present_schema_tree(Some(ConnectionId::new(2)), Some(schema), &[]);
        let tree = result.content.as_ref().unwrap();
        assert!(tree.tables[0].comment.is_none());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("sqlreview schema object table orders")
        );
    }
}
