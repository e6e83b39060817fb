use serde::{Deserialize, Serialize};
use sqlreview_types::{
    ConnectionForm, ConnectionId, DatabaseConnection, LlmConfig, LlmConfigForm, LlmConfigId,
    ReportId, SqlId, SqlStatement,
};

use crate::review::ReviewWorkflow;
use crate::versions::VersionWorkflow;

/// Contents of the SQL editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorBuffer {
    pub title: String,
    pub description: String,
    pub content: String,
    pub db_connection_id: Option<ConnectionId>,
}

impl EditorBuffer {
    pub fn from_statement(statement: &SqlStatement) -> Self {
        Self {
            title: statement.title.clone().unwrap_or_default(),
            description: statement.description.clone().unwrap_or_default(),
            content: statement.sql_content.clone().unwrap_or_default(),
            db_connection_id: statement.db_connection_id,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Selection and draft state carried from one user action to the next.
///
/// All mutation goes through the methods below so the editor, the report
/// panel and the two workflows stay consistent with the selected ids.
/// Drafts never hold secrets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSelectionState {
    pub current_sql_id: Option<SqlId>,
    pub current_report_id: Option<ReportId>,
    pub current_connection_id: Option<ConnectionId>,
    pub current_llm_config_id: Option<LlmConfigId>,
    pub current_sql_page: u32,
    pub editor: EditorBuffer,
    pub connection_draft: Option<ConnectionForm>,
    pub llm_draft: Option<LlmConfigForm>,
    pub review: ReviewWorkflow,
    pub versions: VersionWorkflow,
}

impl Default for UiSelectionState {
    fn default() -> Self {
        Self {
            current_sql_id: None,
            current_report_id: None,
            current_connection_id: None,
            current_llm_config_id: None,
            current_sql_page: 1,
            editor: EditorBuffer::default(),
            connection_draft: None,
            llm_draft: None,
            review: ReviewWorkflow::default(),
            versions: VersionWorkflow::default(),
        }
    }
}

impl UiSelectionState {
    /// Repairs state left behind by an interrupted action.
    pub fn settle(&mut self) {
        self.review.settle();
        self.versions.settle();
        if self.current_sql_page == 0 {
            self.current_sql_page = 1;
        }
        if self.versions.sql_id().is_some() && self.versions.sql_id() != self.current_sql_id {
            self.versions.close();
        }
    }

    // --- SQL editor ---

    pub fn new_statement(&mut self) {
        self.current_sql_id = None;
        self.editor.clear();
        self.hide_report();
        self.versions.close();
    }

    pub fn load_statement(&mut self, statement: &SqlStatement) {
        if self.current_sql_id != Some(statement.id) {
            self.hide_report();
            self.versions.close();
        }
        self.current_sql_id = Some(statement.id);
        self.editor = EditorBuffer::from_statement(statement);
    }

    /// Clears the editor if `sql_id` is the statement open in it.
    pub fn forget_statement(&mut self, sql_id: SqlId) -> bool {
        if self.current_sql_id == Some(sql_id) {
            self.new_statement();
            true
        } else {
            false
        }
    }

    pub fn show_report(&mut self, sql_id: SqlId, report_id: Option<ReportId>) {
        self.review.show(sql_id, report_id);
        self.current_report_id = report_id;
    }

    pub fn hide_report(&mut self) {
        self.review.reset();
        self.current_report_id = None;
    }

    pub fn report_visible(&self) -> bool {
        self.review.is_displayed()
    }

    // --- connections ---

    pub fn new_connection(&mut self) {
        self.current_connection_id = None;
        self.connection_draft = None;
    }

    pub fn edit_connection(&mut self, record: &DatabaseConnection) {
        self.current_connection_id = Some(record.id);
        self.connection_draft = Some(ConnectionForm::from_record(record));
    }

    pub fn keep_connection_draft(&mut self, form: &ConnectionForm) {
        self.connection_draft = Some(form.without_secret());
    }

    pub fn forget_connection(&mut self, id: ConnectionId) {
        if self.current_connection_id == Some(id) {
            self.new_connection();
        }
    }

    // --- model configs ---

    pub fn new_llm_config(&mut self) {
        self.current_llm_config_id = None;
        self.llm_draft = None;
    }

    pub fn edit_llm_config(&mut self, record: &LlmConfig) {
        self.current_llm_config_id = Some(record.id);
        self.llm_draft = Some(LlmConfigForm::from_record(record));
    }

    pub fn keep_llm_draft(&mut self, form: &LlmConfigForm) {
        self.llm_draft = Some(form.without_secret());
    }

    pub fn forget_llm_config(&mut self, id: LlmConfigId) {
        if self.current_llm_config_id == Some(id) {
            self.new_llm_config();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlreview_types::{DbType, StatementStatus};

    fn statement(id: i64) -> SqlStatement {
        SqlStatement {
            id: SqlId::new(id),
            title: Some("Active users".to_string()),
            sql_content: Some("SELECT * FROM users".to_string()),
            description: Some("dashboard".to_string()),
            status: StatementStatus::Draft,
            db_connection_id: Some(ConnectionId::new(2)),
            version: Some(1),
            tags: None,
            category: None,
            created_at: None,
            updated_at: None,
            last_reviewed_at: None,
        }
    }

    #[test]
    fn test_defaults_start_on_first_page() {
        let state: UiSelectionState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.current_sql_page, 1);
        assert_eq!(state, UiSelectionState::default());
    }

    #[test]
    fn test_forget_open_statement_clears_editor_and_report() {
        let mut state = UiSelectionState::default();
        state.load_statement(&statement(7));
        state.show_report(SqlId::new(7), Some(ReportId::new(70)));

        assert!(!state.forget_statement(SqlId::new(8)));
        assert!(state.report_visible());

        assert!(state.forget_statement(SqlId::new(7)));
        assert!(state.editor.is_empty());
        assert_eq!(state.current_sql_id, None);
        assert_eq!(state.current_report_id, None);
        assert!(!state.report_visible());
    }

    #[test]
    fn test_drafts_never_keep_secrets() {
        let mut state = UiSelectionState::default();
        let form = ConnectionForm {
            name: "prod".to_string(),
            db_type: Some(DbType::Mysql),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        state.keep_connection_draft(&form);

        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_settle_closes_versions_of_other_statement() {
        let mut state = UiSelectionState::default();
        state.load_statement(&statement(1));
        state.versions.open(SqlId::new(1));
        state.new_statement();
        state.versions.open(SqlId::new(1));

        state.settle();
        assert_eq!(state.versions, VersionWorkflow::Closed);
    }
}
