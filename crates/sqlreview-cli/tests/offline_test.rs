//! Commands that finish without reaching the review service.

use sqlreview_testing::TestWorld;
use sqlreview_testing::world::UNREACHABLE_SERVER;

fn saved_state(world: &TestWorld) -> serde_json::Value {
    let content = std::fs::read_to_string(world.data_dir().join("state.json"))
        .expect("state.json should exist");
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_guidance_without_command() {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["server"], UNREACHABLE_SERVER);
    assert!(json["content"]["open_statement"].is_null());
    assert!(!json["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_state_show_on_fresh_data_dir() {
    let world = TestWorld::new();
    let result = world.run(&["state", "show", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["state"]["current_sql_page"], 1);
    assert!(json["content"]["state"]["current_sql_id"].is_null());
}

#[test]
fn test_edit_then_format_updates_editor() {
    let world = TestWorld::new();

    let result = world
        .run(&["sql", "edit", "--title", "small", "--content", "select a,b from t"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let result = world.run(&["sql", "format"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("SQL formatted"));

    let state = saved_state(&world);
    assert_eq!(state["editor"]["title"], "small");
    let content = state["editor"]["content"].as_str().unwrap();
    insta::assert_snapshot!(content, @r"
    select a,
        b
    from t
    ");
}

#[test]
fn test_edit_reads_sql_from_file() {
    let world = TestWorld::new();
    let file = world.write_file("daily.sql", "SELECT day, COUNT(*) FROM orders GROUP BY day");

    let result = world
        .run(&["sql", "edit", "--file", file.to_str().unwrap(), "--connection", "3"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let state = saved_state(&world);
    assert_eq!(
        state["editor"]["content"],
        "SELECT day, COUNT(*) FROM orders GROUP BY day"
    );
    assert_eq!(state["editor"]["db_connection_id"], 3);

    let result = world.run(&["sql", "edit", "--no-connection"]).unwrap();
    assert!(result.success());
    assert!(saved_state(&world)["editor"]["db_connection_id"].is_null());
}

#[test]
fn test_format_empty_editor_warns() {
    let world = TestWorld::new();
    let result = world.run(&["sql", "format", "--format", "json"]).unwrap();
    assert!(!result.success());
    assert!(!result.stderr().contains("Error:"));

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_review_needs_saved_statement() {
    let world = TestWorld::new();
    world
        .run(&["sql", "edit", "--title", "draft", "--content", "select 1"])
        .unwrap();

    let result = world.run(&["review", "run", "--format", "json"]).unwrap();
    assert!(!result.success());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert!(
        json["badge"]["label"]
            .as_str()
            .unwrap()
            .contains("Save the SQL statement first")
    );
    assert!(json["content"].is_null());
}

#[test]
fn test_import_preview_shows_first_rows() {
    let world = TestWorld::new();
    let file = world.write_file(
        "statements.csv",
        "title,sql_content\nfirst,select 1\nsecond,select 2\n",
    );

    let result = world
        .run(&["sql", "import-preview", file.to_str().unwrap(), "--format", "json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["file_name"], "statements.csv");
    assert_eq!(json["content"]["headers"][1], "sql_content");
    assert_eq!(json["content"]["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["content"]["can_import"], true);
}

#[test]
fn test_import_preview_rejects_header_only_file() {
    let world = TestWorld::new();
    let file = world.write_file("empty.csv", "title,sql_content\n");

    let result = world
        .run(&["sql", "import-preview", file.to_str().unwrap(), "--format", "json"])
        .unwrap();
    assert!(!result.success());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert!(json["badge"]["label"].as_str().unwrap().contains("header row"));
}

#[test]
fn test_restore_without_selection_warns() {
    let world = TestWorld::new();
    let result = world.run(&["version", "restore", "--format", "json"]).unwrap();
    assert!(!result.success());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["label"], "Select a version to restore first");
}

#[test]
fn test_schema_without_connection_is_a_hint() {
    let world = TestWorld::new();
    let result = world.run(&["schema", "tree", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "info");
}

#[test]
fn test_corrupt_state_blocks_until_reset() {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("state.json"), "{not json").unwrap();

    let result = world.run(&["sql", "show"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("state reset"));

    let result = world.run(&["state", "reset"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Selection state reset"));

    let result = world.run(&["sql", "show"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
}
