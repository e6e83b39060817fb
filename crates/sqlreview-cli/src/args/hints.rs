pub mod cmd {
    // Statement commands
    pub const SQL_LIST: &str = "sqlreview sql list";
    pub const SQL_NEW: &str = "sqlreview sql new";
    pub const SQL_OPEN: &str = "sqlreview sql open <id>";
    pub const SQL_EDIT: &str = "sqlreview sql edit --title <title> --file <path>";
    pub const SQL_SAVE: &str = "sqlreview sql save";
    pub const SQL_IMPORT_PREVIEW: &str = "sqlreview sql import-preview <file>";

    // Review commands
    pub const REVIEW_RUN: &str = "sqlreview review run";
    pub const REVIEW_HISTORY: &str = "sqlreview review history";

    // Version commands
    pub const VERSION_LIST: &str = "sqlreview version list";
    pub const VERSION_SELECT: &str = "sqlreview version select <id>";
    pub const VERSION_RESTORE: &str = "sqlreview version restore";

    // Connection and model commands
    pub const CONNECTION_LIST: &str = "sqlreview connection list";
    pub const CONNECTION_SAVE: &str =
        "sqlreview connection save --name <name> --type <db_type> --host <host>";
    pub const LLM_LIST: &str = "sqlreview llm list";
    pub const LLM_SAVE: &str =
        "sqlreview llm save --name <name> --provider <provider> --model <model>";
    pub const LLM_SET_DEFAULT: &str = "sqlreview llm set-default <id>";

    // Schema commands
    pub const SCHEMA_TREE: &str = "sqlreview schema tree --connection <id>";

    // Service
    pub const HEALTH: &str = "sqlreview health";
    pub const STATE_RESET: &str = "sqlreview state reset";
}

pub mod fmt {
    pub fn sql_list_page(page: u32) -> String {
        format!("sqlreview sql list --page {}", page)
    }

    pub fn sql_open(id: impl std::fmt::Display) -> String {
        format!("sqlreview sql open {}", id)
    }

    pub fn review_show(report_id: impl std::fmt::Display) -> String {
        format!("sqlreview review show --report {}", report_id)
    }

    pub fn version_compare(id: impl std::fmt::Display) -> String {
        format!("sqlreview version compare {}", id)
    }

    pub fn schema_object(kind: impl std::fmt::Display, name: &str) -> String {
        format!("sqlreview schema object {} {}", kind, name)
    }
}
