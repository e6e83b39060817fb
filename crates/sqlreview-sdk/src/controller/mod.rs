//! User actions.
//!
//! The [`Controller`] owns the selection state for the duration of one
//! action. Every public method is one user action: it checks local state,
//! makes at most one request (plus a follow-up refresh or report fetch), and
//! records the outcome as [`Notice`]s. Failures never escape as errors; the
//! method returns `None` and leaves a warning or error notice behind.

mod connections;
mod llm;
mod review;
mod schema;
mod statements;
mod tools;
mod transfer;
mod versions;

use serde::Serialize;
use sqlreview_core::{Notice, NoticeLevel, PageWindow, UiSelectionState};
use sqlreview_types::{ReviewReport, ReviewSummary, SqlStatement, StatementPage};

use crate::client::Client;
use crate::error::{Error, Result};

pub use transfer::ImportOutcome;
pub use versions::RestoreOutcome;

/// Asks the user to confirm a destructive action.
pub trait Confirmer: Send {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Confirms everything (`--yes`).
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Result of a create, update or delete, with the list as re-read afterwards.
///
/// `refreshed` is `None` when the follow-up read failed; the mutation itself
/// still succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct Mutation<T> {
    pub id: Option<i64>,
    pub created: bool,
    pub message: String,
    pub refreshed: Option<T>,
}

/// One page of statements with its navigation
#[derive(Debug, Clone, Serialize)]
pub struct StatementListing {
    pub page: StatementPage,
    pub navigation: Option<PageWindow>,
}

impl StatementListing {
    pub fn new(page: StatementPage) -> Self {
        let navigation = PageWindow::for_page(&page);
        Self { page, navigation }
    }
}

/// A statement loaded into the editor, with its latest report if any
#[derive(Debug, Clone, Serialize)]
pub struct OpenedStatement {
    pub statement: SqlStatement,
    pub history: Vec<ReviewSummary>,
    pub report: Option<ReviewReport>,
}

pub struct Controller {
    client: Client,
    state: UiSelectionState,
    confirmer: Box<dyn Confirmer>,
    notices: Vec<Notice>,
}

impl Controller {
    pub fn new(
        client: Client,
        mut state: UiSelectionState,
        confirmer: Box<dyn Confirmer>,
    ) -> Self {
        state.settle();
        Self {
            client,
            state,
            confirmer,
            notices: Vec::new(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn state(&self) -> &UiSelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiSelectionState {
        &mut self.state
    }

    pub fn into_state(self) -> UiSelectionState {
        self.state
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Whether an action ended with a warning or an error.
    pub fn has_failures(&self) -> bool {
        self.notices
            .iter()
            .any(|n| matches!(n.level, NoticeLevel::Warning | NoticeLevel::Error))
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn fail<T>(&mut self, err: Error) -> Option<T> {
        tracing::debug!(error = %err, "action failed");
        let notice = if err.is_user_error() {
            Notice::warning(err.to_string())
        } else {
            Notice::error(err.to_string())
        };
        self.notify(notice);
        None
    }

    fn settle<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => self.fail(err),
        }
    }

    /// Declining leaves an info notice.
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.confirmer.confirm(prompt) {
            true
        } else {
            self.notify(Notice::info("Cancelled"));
            false
        }
    }
}

/// A follow-up read after a successful mutation only logs its failure.
fn logged<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "failed to refresh {}", what);
            None
        }
    }
}
