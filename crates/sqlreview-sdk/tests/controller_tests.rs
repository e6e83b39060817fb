use std::sync::Arc;

use serde_json::json;
use sqlreview_core::{NoticeLevel, UiSelectionState, VersionWorkflow};
use sqlreview_sdk::{AssumeYes, Client, Controller, Method, RequestBody};
use sqlreview_testing::{FakeTransport, ScriptedConfirmer, fixtures};
use sqlreview_types::{
    ConnectionForm, ConnectionId, DbType, LlmConfigForm, LlmConfigId, LlmProvider, ReportId, SqlId,
    VersionId,
};

fn controller_with(fake: &Arc<FakeTransport>, state: UiSelectionState) -> Controller {
    Controller::new(Client::new(fake.clone()), state, Box::new(AssumeYes))
}

fn controller(fake: &Arc<FakeTransport>) -> Controller {
    controller_with(fake, UiSelectionState::default())
}

fn levels(controller: &Controller) -> Vec<NoticeLevel> {
    controller.notices().iter().map(|n| n.level).collect()
}

fn mysql_form(name: &str) -> ConnectionForm {
    ConnectionForm {
        name: name.to_string(),
        db_type: Some(DbType::Mysql),
        host: Some("localhost".to_string()),
        port: Some(3306),
        password: Some("secret".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_save_connection_posts_without_selection() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Post, "/api/db-connections/", 200, fixtures::created(5));
    fake.on(Method::Get, "/api/db-connections/", 200, json!([fixtures::connection(5, "prod")]));

    let mut controller = controller(&fake);
    let saved = controller.save_connection(&mysql_form("prod")).await.unwrap();

    assert!(saved.created);
    assert_eq!(saved.id, Some(5));
    assert_eq!(saved.refreshed.unwrap().len(), 1);
    assert_eq!(fake.count(Method::Post, "/api/db-connections/"), 1);
    assert_eq!(controller.state().current_connection_id, None);
}

#[tokio::test]
async fn test_save_connection_puts_to_selected_id() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Put, "/api/db-connections/7", 200, fixtures::message("updated"));
    fake.on(Method::Get, "/api/db-connections/", 200, json!([]));

    let mut state = UiSelectionState::default();
    state.current_connection_id = Some(ConnectionId::new(7));
    let mut controller = controller_with(&fake, state);

    let saved = controller.save_connection(&mysql_form("prod")).await.unwrap();
    assert!(!saved.created);
    assert_eq!(fake.count(Method::Put, "/api/db-connections/7"), 1);
    assert_eq!(fake.count(Method::Post, "/api/db-connections/"), 0);

    // selection and draft are cleared after a successful save
    assert_eq!(controller.state().current_connection_id, None);
    assert_eq!(controller.state().connection_draft, None);
}

#[tokio::test]
async fn test_refresh_failure_keeps_success_notice() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Post, "/api/db-connections/", 200, fixtures::created(5));
    fake.on(Method::Get, "/api/db-connections/", 500, json!({"detail": "db down"}));

    let mut controller = controller(&fake);
    let saved = controller.save_connection(&mysql_form("prod")).await.unwrap();

    assert!(saved.refreshed.is_none());
    assert_eq!(levels(&controller), vec![NoticeLevel::Success]);
}

#[tokio::test]
async fn test_connection_test_failure_is_only_a_notice() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Post,
        "/api/db-connections/test",
        200,
        json!({"success": false, "message": "Access denied"}),
    );

    let mut controller = controller(&fake);
    let result = controller.test_connection(&mysql_form("prod")).await.unwrap();

    assert!(!result.success);
    assert_eq!(controller.notices()[0].message, "Access denied");
    assert_eq!(controller.notices()[0].level, NoticeLevel::Error);
    assert_eq!(controller.state().current_connection_id, None);
}

fn openai_form(name: &str) -> LlmConfigForm {
    LlmConfigForm {
        name: name.to_string(),
        provider: Some(LlmProvider::Openai),
        model_name: "gpt-4o".to_string(),
        api_key: Some("sk-test".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_save_llm_config_posts_without_selection() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Post, "/api/llm-configs/", 200, fixtures::created(8));
    fake.on(
        Method::Get,
        "/api/llm-configs/",
        200,
        json!([fixtures::llm_config(8, "main", true)]),
    );

    let mut controller = controller(&fake);
    let saved = controller.save_llm_config(&openai_form("main")).await.unwrap();

    assert!(saved.created);
    assert_eq!(saved.id, Some(8));
    assert_eq!(saved.refreshed.unwrap().len(), 1);
    assert_eq!(fake.count(Method::Post, "/api/llm-configs/"), 1);
    assert_eq!(controller.state().current_llm_config_id, None);
}

#[tokio::test]
async fn test_save_llm_config_puts_to_selected_id() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Put, "/api/llm-configs/4", 200, fixtures::message("updated"));
    fake.on(Method::Get, "/api/llm-configs/", 200, json!([]));

    let mut state = UiSelectionState::default();
    state.current_llm_config_id = Some(LlmConfigId::new(4));
    let mut controller = controller_with(&fake, state);

    let saved = controller.save_llm_config(&openai_form("main")).await.unwrap();
    assert!(!saved.created);
    assert_eq!(fake.count(Method::Put, "/api/llm-configs/4"), 1);
    assert_eq!(fake.count(Method::Post, "/api/llm-configs/"), 0);
    assert_eq!(controller.state().current_llm_config_id, None);
    assert_eq!(controller.state().llm_draft, None);
}

#[tokio::test]
async fn test_set_default_llm_config_puts_and_refreshes() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Put, "/api/llm-configs/2/set-default", 200, fixtures::message("ok"));
    fake.on(
        Method::Get,
        "/api/llm-configs/",
        200,
        json!([fixtures::llm_config(1, "fast", false), fixtures::llm_config(2, "main", true)]),
    );

    let mut controller = controller(&fake);
    let outcome = controller.set_default_llm_config(LlmConfigId::new(2)).await.unwrap();

    assert_eq!(fake.count(Method::Put, "/api/llm-configs/2/set-default"), 1);
    let refreshed = outcome.refreshed.unwrap();
    let defaults: Vec<_> = refreshed
        .iter()
        .filter(|c| c.is_default)
        .map(|c| c.id)
        .collect();
    assert_eq!(defaults, vec![LlmConfigId::new(2)]);
    assert_eq!(levels(&controller), vec![NoticeLevel::Success]);
}

#[tokio::test]
async fn test_deleting_selected_llm_config_clears_selection() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Delete, "/api/llm-configs/4", 200, fixtures::message("deleted"));
    fake.on(Method::Get, "/api/llm-configs/", 200, json!([]));

    let mut state = UiSelectionState::default();
    state.current_llm_config_id = Some(LlmConfigId::new(4));
    state.llm_draft = Some(openai_form("main").without_secret());
    let mut controller = controller_with(&fake, state);

    controller.delete_llm_config(LlmConfigId::new(4)).await.unwrap();
    assert_eq!(fake.count(Method::Delete, "/api/llm-configs/4"), 1);
    assert_eq!(controller.state().current_llm_config_id, None);
    assert_eq!(controller.state().llm_draft, None);
}

#[tokio::test]
async fn test_tested_connection_draft_survives_for_save() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Post,
        "/api/db-connections/test",
        200,
        json!({"success": true, "message": "Connected"}),
    );

    let mut controller = controller(&fake);
    controller.test_connection(&mysql_form("staging")).await.unwrap();

    let draft = controller.state().connection_draft.clone().unwrap();
    assert_eq!(draft.name, "staging");
    assert_eq!(draft.port, Some(3306));
    assert_eq!(draft.password, None);
}

#[tokio::test]
async fn test_statement_list_navigation() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Get, "/api/sql-statements/", 200, fixtures::statement_page(1, 3, 25, 10));

    let mut controller = controller(&fake);
    let listing = controller.load_sql_statements(1).await.unwrap();
    let nav = listing.navigation.unwrap();
    assert!(nav.is_first());
    assert_eq!(nav.next, Some(2));
    assert_eq!(nav.pages, vec![1, 2, 3]);

    let request = fake.last_request(Method::Get, "/api/sql-statements/").unwrap();
    assert!(request.query.contains(&("page_size".to_string(), "10".to_string())));
    assert!(request.query.contains(&("order_dir".to_string(), "desc".to_string())));
}

#[tokio::test]
async fn test_single_page_has_no_navigation() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Get, "/api/sql-statements/", 200, fixtures::statement_page(1, 1, 4, 4));

    let mut controller = controller(&fake);
    let listing = controller.load_sql_statements(1).await.unwrap();
    assert!(listing.navigation.is_none());
}

#[tokio::test]
async fn test_blank_statement_is_rejected_before_any_request() {
    let fake = Arc::new(FakeTransport::new());
    let mut controller = controller(&fake);
    controller.state_mut().editor.title = "  ".to_string();
    controller.state_mut().editor.content = "SELECT 1".to_string();

    assert!(controller.save_statement().await.is_none());
    assert!(fake.calls().is_empty());
    assert_eq!(levels(&controller), vec![NoticeLevel::Warning]);
}

#[tokio::test]
async fn test_created_statement_becomes_current() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Post, "/api/sql-statements/", 200, fixtures::created(42));
    fake.on(Method::Get, "/api/sql-statements/", 200, fixtures::statement_page(1, 1, 1, 1));

    let mut controller = controller(&fake);
    controller.state_mut().editor.title = " Orders ".to_string();
    controller.state_mut().editor.content = "SELECT * FROM orders".to_string();

    let saved = controller.save_statement().await.unwrap();
    assert!(saved.created);
    assert_eq!(controller.state().current_sql_id, Some(SqlId::new(42)));

    let request = fake.last_request(Method::Post, "/api/sql-statements/").unwrap();
    match request.body {
        RequestBody::Json(body) => assert_eq!(body["title"], "Orders"),
        other => panic!("unexpected body: {:?}", other),
    }
}

#[tokio::test]
async fn test_deleting_open_statement_clears_editor_and_report() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Get,
        "/api/sql-statements/3",
        200,
        fixtures::statement(3, "Users", "SELECT * FROM users"),
    );
    fake.on(Method::Get, "/api/reviews/sql/3/history", 200, fixtures::history(&[31]));
    fake.on(Method::Get, "/api/reviews/reports/31", 200, fixtures::report(31, 3));
    fake.on(Method::Delete, "/api/sql-statements/3", 200, fixtures::message("deleted"));
    fake.on(Method::Get, "/api/sql-statements/", 200, fixtures::statement_page(1, 1, 0, 0));

    let confirmer = ScriptedConfirmer::new(true);
    let prompts = confirmer.prompts();
    let mut controller = Controller::new(
        Client::new(fake.clone()),
        UiSelectionState::default(),
        Box::new(confirmer),
    );

    let opened = controller.open_statement(SqlId::new(3)).await.unwrap();
    assert!(opened.report.is_some());
    assert!(controller.state().report_visible());

    controller.delete_statement(SqlId::new(3)).await.unwrap();
    assert_eq!(prompts.lock().unwrap().len(), 1);
    assert!(controller.state().editor.is_empty());
    assert_eq!(controller.state().current_sql_id, None);
    assert!(!controller.state().report_visible());
}

#[tokio::test]
async fn test_declined_delete_makes_no_request() {
    let fake = Arc::new(FakeTransport::new());
    let mut controller = Controller::new(
        Client::new(fake.clone()),
        UiSelectionState::default(),
        Box::new(ScriptedConfirmer::new(false)),
    );

    assert!(controller.delete_statement(SqlId::new(3)).await.is_none());
    assert!(fake.calls().is_empty());
    assert_eq!(levels(&controller), vec![NoticeLevel::Info]);
    assert!(!controller.has_failures());
}

#[tokio::test]
async fn test_restore_without_selection_warns_and_makes_no_request() {
    let fake = Arc::new(FakeTransport::new());
    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(1));
    let mut controller = controller_with(&fake, state);

    assert!(controller.restore_version().await.is_none());
    assert!(fake.calls().is_empty());
    assert_eq!(levels(&controller), vec![NoticeLevel::Warning]);
}

#[tokio::test]
async fn test_restore_confirms_then_posts_and_reloads() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Get,
        "/api/sql-statements/1/versions",
        200,
        fixtures::versions(&[(30, 3, "SELECT 3"), (20, 2, "SELECT 2"), (10, 1, "SELECT 1")]),
    );
    fake.on(Method::Post, "/api/sql-statements/1/restore/20", 200, fixtures::message("restored"));
    fake.on(
        Method::Get,
        "/api/sql-statements/1",
        200,
        fixtures::statement(1, "Restored", "SELECT 2"),
    );
    fake.on(Method::Get, "/api/reviews/sql/1/history", 200, json!([]));

    let confirmer = ScriptedConfirmer::new(true);
    let prompts = confirmer.prompts();
    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(1));
    state.editor.content = "unsaved edits".to_string();
    let mut controller = Controller::new(Client::new(fake.clone()), state, Box::new(confirmer));

    controller.select_version(VersionId::new(20)).await.unwrap();
    assert!(prompts.lock().unwrap().is_empty());

    let outcome = controller.restore_version().await.unwrap();
    assert_eq!(outcome.version_id, VersionId::new(20));
    assert_eq!(prompts.lock().unwrap().len(), 1);
    assert_eq!(fake.count(Method::Post, "/api/sql-statements/1/restore/20"), 1);
    assert_eq!(controller.state().editor.content, "SELECT 2");
    assert_eq!(controller.state().versions, VersionWorkflow::Closed);
}

#[tokio::test]
async fn test_declined_restore_keeps_selection_and_makes_no_request() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Get,
        "/api/sql-statements/1/versions",
        200,
        fixtures::versions(&[(30, 3, "SELECT 3"), (20, 2, "SELECT 2"), (10, 1, "SELECT 1")]),
    );

    let confirmer = ScriptedConfirmer::new(false);
    let prompts = confirmer.prompts();
    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(1));
    let mut controller = Controller::new(Client::new(fake.clone()), state, Box::new(confirmer));

    controller.select_version(VersionId::new(20)).await.unwrap();
    assert!(controller.restore_version().await.is_none());

    assert_eq!(prompts.lock().unwrap().len(), 1);
    assert_eq!(fake.count(Method::Post, "/api/sql-statements/1/restore/20"), 0);
    let last = controller.notices().last().unwrap();
    assert_eq!(last.level, NoticeLevel::Info);
    assert_eq!(last.message, "Cancelled");
    assert_eq!(controller.state().versions.selected(), Some(VersionId::new(20)));
    assert!(!controller.has_failures());
}

#[tokio::test]
async fn test_failed_restore_keeps_selection() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Post,
        "/api/sql-statements/1/restore/20",
        400,
        json!({"detail": "version missing"}),
    );

    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(1));
    state.versions.open(SqlId::new(1));
    state.versions.select(VersionId::new(20)).unwrap();
    let mut controller = controller_with(&fake, state);

    assert!(controller.restore_version().await.is_none());
    assert_eq!(controller.state().versions.selected(), Some(VersionId::new(20)));
    assert_eq!(controller.notices()[0].message, "version missing");
}

#[tokio::test]
async fn test_newest_version_cannot_be_selected() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Get,
        "/api/sql-statements/1/versions",
        200,
        fixtures::versions(&[(30, 3, "SELECT 3"), (20, 2, "SELECT 2")]),
    );
    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(1));
    let mut controller = controller_with(&fake, state);

    assert!(controller.select_version(VersionId::new(30)).await.is_none());
    assert_eq!(controller.state().versions.selected(), None);

    let diff = controller.compare_version(VersionId::new(20)).await.unwrap();
    assert_eq!(diff.newer.id, VersionId::new(30));
}

#[tokio::test]
async fn test_header_only_csv_is_never_uploaded() {
    let fake = Arc::new(FakeTransport::new());
    let mut controller = controller(&fake);

    let outcome = controller
        .import_csv("statements.csv", b"title,sql_content,description\n".to_vec(), None)
        .await;

    assert!(outcome.is_none());
    assert!(fake.calls().is_empty());
    assert_eq!(levels(&controller), vec![NoticeLevel::Warning]);
}

#[tokio::test]
async fn test_import_uploads_file_field_and_reports_row_errors() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Post,
        "/api/sql-statements/import-csv",
        200,
        json!({"success": true, "imported_count": 1, "message": "ok", "errors": ["row 3: empty sql"]}),
    );
    fake.on(Method::Get, "/api/sql-statements/", 200, fixtures::statement_page(1, 1, 1, 1));

    let mut controller = controller(&fake);
    let csv = b"title,sql_content\nA,SELECT 1\nB,\n".to_vec();
    let outcome = controller
        .import_csv("statements.csv", csv, Some(ConnectionId::new(2)))
        .await
        .unwrap();

    assert_eq!(outcome.result.imported_count, 1);
    assert_eq!(levels(&controller), vec![NoticeLevel::Success, NoticeLevel::Warning]);

    let request = fake.last_request(Method::Post, "/api/sql-statements/import-csv").unwrap();
    match request.body {
        RequestBody::Multipart(form) => {
            assert_eq!(form.field, "file");
            assert_eq!(form.text_fields, vec![("db_connection_id".to_string(), "2".to_string())]);
        }
        other => panic!("unexpected body: {:?}", other),
    }
}

#[tokio::test]
async fn test_review_requires_saved_statement() {
    let fake = Arc::new(FakeTransport::new());
    let mut controller = controller(&fake);

    assert!(controller.review_current(None).await.is_none());
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_review_uses_default_model_and_displays_report() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(
        Method::Get,
        "/api/llm-configs/",
        200,
        json!([fixtures::llm_config(1, "fast", false), fixtures::llm_config(2, "main", true)]),
    );
    fake.on(
        Method::Post,
        "/api/reviews/sql/4/review",
        200,
        json!({"success": true, "report_id": 77, "review_result": fixtures::report(77, 4)}),
    );

    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(4));
    let mut controller = controller_with(&fake, state);

    let outcome = controller.review_current(None).await.unwrap();
    assert!(outcome.review_result.security.is_none());

    let request = fake.last_request(Method::Post, "/api/reviews/sql/4/review").unwrap();
    assert_eq!(request.query, vec![("llm_config_id".to_string(), "2".to_string())]);
    assert!(controller.state().report_visible());
    assert_eq!(controller.state().current_report_id.map(|id| id.get()), Some(77));
}

#[tokio::test]
async fn test_failed_review_returns_to_idle() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Get, "/api/llm-configs/", 200, json!([]));
    fake.on(
        Method::Post,
        "/api/reviews/sql/4/review",
        400,
        json!({"detail": "LLM config missing"}),
    );

    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(4));
    let mut controller = controller_with(&fake, state);

    assert!(controller.review_current(None).await.is_none());
    assert!(!controller.state().review.is_pending_for(SqlId::new(4)));
    assert_eq!(controller.notices()[0].message, "LLM config missing");
    assert_eq!(controller.notices()[0].level, NoticeLevel::Error);
}

#[tokio::test]
async fn test_report_of_another_statement_leaves_panel_alone() {
    let fake = Arc::new(FakeTransport::new());
    fake.on(Method::Get, "/api/reviews/reports/90", 200, fixtures::report(90, 9));
    fake.on(Method::Get, "/api/reviews/reports/41", 200, fixtures::report(41, 4));

    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(4));
    let mut controller = controller_with(&fake, state);

    let other = controller.open_report(ReportId::new(90)).await.unwrap();
    assert_eq!(other.sql_statement_id, Some(SqlId::new(9)));
    assert!(!controller.state().report_visible());
    assert_eq!(controller.state().current_report_id, None);
    assert_eq!(levels(&controller), vec![NoticeLevel::Info]);

    controller.open_report(ReportId::new(41)).await.unwrap();
    assert!(controller.state().report_visible());
    assert_eq!(controller.state().current_report_id, Some(ReportId::new(41)));
}

#[tokio::test]
async fn test_schema_without_connection_is_a_hint() {
    let fake = Arc::new(FakeTransport::new());
    let mut controller = controller(&fake);

    assert!(controller.schema_tree(None).await.is_none());
    assert!(fake.calls().is_empty());
    assert_eq!(levels(&controller), vec![NoticeLevel::Info]);
}

#[tokio::test]
async fn test_export_writes_dated_file() {
    let fake = Arc::new(FakeTransport::new());
    fake.on_raw(
        Method::Get,
        "/api/sql-statements/export-csv",
        200,
        "ID,title\n1,Users\n".as_bytes().to_vec(),
    );
    let dir = tempfile::tempdir().unwrap();

    let mut controller = controller(&fake);
    let path = controller.export_csv(dir.path()).await.unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("sql_statements_") && name.ends_with(".csv"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "ID,title\n1,Users\n");
}
