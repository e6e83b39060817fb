use sqlreview_core::{Notice, SQL_PAGE_SIZE, validation};
use sqlreview_types::{SqlId, StatementStatistics};

use super::{Controller, Mutation, OpenedStatement, StatementListing, logged};

impl Controller {
    /// Fetches one page and makes it the current page.
    pub async fn load_sql_statements(&mut self, page: u32) -> Option<StatementListing> {
        let page = page.max(1);
        let result = self.client.statements().list(page, SQL_PAGE_SIZE).await;
        let listing = StatementListing::new(self.settle(result)?);
        self.state.current_sql_page = page;
        Some(listing)
    }

    /// Empties the editor for a new statement and hides the report.
    pub fn new_statement(&mut self) {
        self.state.new_statement();
    }

    /// Loads a statement into the editor along with its newest report.
    pub async fn open_statement(&mut self, id: SqlId) -> Option<OpenedStatement> {
        let result = self.client.statements().get(id).await;
        let statement = self.settle(result)?;
        self.state.load_statement(&statement);

        let history = logged("review history", self.client.reviews().history(id).await)
            .unwrap_or_default();

        let report = match history.first() {
            Some(latest) => {
                let report =
                    logged("review report", self.client.reviews().report(latest.id).await);
                if report.is_some() {
                    self.state.show_report(id, Some(latest.id));
                } else {
                    self.state.hide_report();
                }
                report
            }
            None => {
                self.state.hide_report();
                None
            }
        };

        Some(OpenedStatement {
            statement,
            history,
            report,
        })
    }

    /// Saves the editor: POST for a new statement (adopting the returned id),
    /// PUT for the open one. Title and content must not be blank.
    pub async fn save_statement(&mut self) -> Option<Mutation<StatementListing>> {
        let form = match validation::statement_form(&self.state.editor) {
            Ok(form) => form,
            Err(err) => return self.fail(err.into()),
        };

        let (id, created) = match self.state.current_sql_id {
            Some(id) => {
                let result = self.client.statements().update(id, &form).await;
                self.settle(result)?;
                (id, false)
            }
            None => {
                let result = self.client.statements().create(&form).await;
                let id = SqlId::new(self.settle(result)?.id);
                self.state.current_sql_id = Some(id);
                (id, true)
            }
        };

        self.state.editor.title = form.title;
        self.state.editor.content = form.sql_content;
        self.state.editor.description = form.description;

        let message = if created {
            "SQL statement created"
        } else {
            "SQL statement updated"
        };
        self.notify(Notice::success(message));

        let refreshed = self.refresh_statements().await;
        Some(Mutation {
            id: Some(id.get()),
            created,
            message: message.to_string(),
            refreshed,
        })
    }

    /// Deleting the statement open in the editor also clears the editor and
    /// hides its report.
    pub async fn delete_statement(&mut self, id: SqlId) -> Option<Mutation<StatementListing>> {
        if !self.confirm(&format!("Delete SQL statement {}?", id)) {
            return None;
        }

        let result = self.client.statements().delete(id).await;
        self.settle(result)?;

        let message = "SQL statement deleted";
        self.notify(Notice::success(message));
        self.state.forget_statement(id);

        let refreshed = self.refresh_statements().await;
        Some(Mutation {
            id: Some(id.get()),
            created: false,
            message: message.to_string(),
            refreshed,
        })
    }

    pub async fn statement_statistics(&mut self) -> Option<StatementStatistics> {
        let result = self.client.statements().statistics().await;
        self.settle(result)
    }

    /// Re-reads the current page after a mutation.
    pub(super) async fn refresh_statements(&mut self) -> Option<StatementListing> {
        let page = self.state.current_sql_page.max(1);
        logged(
            "statements",
            self.client.statements().list(page, SQL_PAGE_SIZE).await,
        )
        .map(StatementListing::new)
    }
}
