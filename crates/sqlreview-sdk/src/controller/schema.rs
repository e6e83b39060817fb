use sqlreview_core::Notice;
use sqlreview_types::{ConnectionId, DatabaseSchema, ObjectDetails, ObjectKind};

use super::Controller;

impl Controller {
    /// Tables and views of a connection; defaults to the editor's connection.
    pub async fn schema_tree(
        &mut self,
        connection: Option<ConnectionId>,
    ) -> Option<DatabaseSchema> {
        let id = self.schema_connection(connection)?;
        let result = self.client.connections().schema(id).await;
        self.settle(result)
    }

    pub async fn object_details(
        &mut self,
        connection: Option<ConnectionId>,
        kind: ObjectKind,
        name: &str,
    ) -> Option<ObjectDetails> {
        let id = self.schema_connection(connection)?;
        let result = self.client.connections().object_details(id, kind, name).await;
        self.settle(result)
    }

    /// No connection means a hint and no request.
    fn schema_connection(&mut self, explicit: Option<ConnectionId>) -> Option<ConnectionId> {
        let id = explicit.or(self.state.editor.db_connection_id);
        if id.is_none() {
            self.notify(Notice::info(
                "Select a database connection to browse its schema",
            ));
        }
        id
    }
}
