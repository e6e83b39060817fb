use sqlreview_core::{Notice, validation};
use sqlreview_types::{ConnectionForm, ConnectionId, ConnectionTestResult, DatabaseConnection};

use super::{Controller, Mutation, logged};

impl Controller {
    pub async fn list_connections(&mut self) -> Option<Vec<DatabaseConnection>> {
        let result = self.client.connections().list().await;
        self.settle(result)
    }

    /// Starts a blank draft.
    pub fn new_connection(&mut self) {
        self.state.new_connection();
    }

    /// Selects a connection and fills the draft from it (password left empty).
    pub async fn edit_connection(&mut self, id: ConnectionId) -> Option<DatabaseConnection> {
        let result = self.client.connections().get(id).await;
        let record = self.settle(result)?;
        self.state.edit_connection(&record);
        Some(record)
    }

    /// Creates when nothing is selected, updates the selection otherwise.
    pub async fn save_connection(
        &mut self,
        form: &ConnectionForm,
    ) -> Option<Mutation<Vec<DatabaseConnection>>> {
        if let Err(err) = validation::connection_form(form) {
            self.state.keep_connection_draft(form);
            return self.fail(err.into());
        }

        let (id, created) = match self.state.current_connection_id {
            Some(id) => {
                let result = self.client.connections().update(id, form).await;
                self.settle(result)?;
                (id.get(), false)
            }
            None => {
                let result = self.client.connections().create(form).await;
                (self.settle(result)?.id, true)
            }
        };

        let message = if created {
            "Database connection created"
        } else {
            "Database connection updated"
        };
        self.notify(Notice::success(message));
        self.state.new_connection();

        let refreshed = logged("connections", self.client.connections().list().await);
        Some(Mutation {
            id: Some(id),
            created,
            message: message.to_string(),
            refreshed,
        })
    }

    /// Tries the draft without saving it.
    /// Tries the unsaved draft. The draft (without password) is kept for the
    /// next save whatever the outcome.
    pub async fn test_connection(
        &mut self,
        form: &ConnectionForm,
    ) -> Option<ConnectionTestResult> {
        self.state.keep_connection_draft(form);
        let result = self.client.connections().test(form).await;
        let outcome = self.settle(result)?;

        let message = outcome.message.clone().unwrap_or_default();
        if outcome.success {
            self.notify(Notice::success(if message.is_empty() {
                "Connection test succeeded".to_string()
            } else {
                message
            }));
        } else {
            self.notify(Notice::error(if message.is_empty() {
                "Connection test failed".to_string()
            } else {
                message
            }));
        }
        Some(outcome)
    }

    pub async fn delete_connection(
        &mut self,
        id: ConnectionId,
    ) -> Option<Mutation<Vec<DatabaseConnection>>> {
        if !self.confirm(&format!("Delete database connection {}?", id)) {
            return None;
        }

        let result = self.client.connections().delete(id).await;
        self.settle(result)?;

        let message = "Database connection deleted";
        self.notify(Notice::success(message));
        self.state.forget_connection(id);

        let refreshed = logged("connections", self.client.connections().list().await);
        Some(Mutation {
            id: Some(id.get()),
            created: false,
            message: message.to_string(),
            refreshed,
        })
    }
}
