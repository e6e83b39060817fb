use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn help(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("sqlreview").unwrap();
    cmd.args(args).arg("--help").assert().success()
}

#[test]
fn test_main_help_lists_namespaces() {
    help(&[]).stdout(
        predicate::str::contains("connection")
            .and(predicate::str::contains("llm"))
            .and(predicate::str::contains("sql"))
            .and(predicate::str::contains("review"))
            .and(predicate::str::contains("version"))
            .and(predicate::str::contains("schema"))
            .and(predicate::str::contains("health"))
            .and(predicate::str::contains("--data-dir"))
            .and(predicate::str::contains("--server")),
    );
}

#[test]
fn test_sql_help_lists_actions() {
    help(&["sql"]).stdout(
        predicate::str::contains("import-preview")
            .and(predicate::str::contains("export"))
            .and(predicate::str::contains("format"))
            .and(predicate::str::contains("stats")),
    );
}

#[test]
fn test_connection_save_help_marks_password_as_unsaved() {
    help(&["connection", "save"]).stdout(
        predicate::str::contains("--password")
            .and(predicate::str::contains("never stored"))
            .and(predicate::str::contains("--type")),
    );
}

#[test]
fn test_version_restore_help() {
    help(&["version", "restore"]).stdout(predicate::str::contains("--version"));
}

#[test]
#[allow(deprecated)]
fn test_unknown_db_type_is_rejected() {
    let mut cmd = Command::cargo_bin("sqlreview").unwrap();
    cmd.args(["connection", "save", "--type", "mongodb"])
        .assert()
        .failure();
}
