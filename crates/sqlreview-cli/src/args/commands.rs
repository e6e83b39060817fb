use super::common::{ConnectionFields, LlmFields, ViewModeArgs};
use clap::Subcommand;
use sqlreview_types::{ConnectionId, LlmConfigId, ObjectKind, ReportId, SqlId, VersionId};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage database connections")]
    Connection {
        #[command(subcommand)]
        command: ConnectionCommand,
    },

    #[command(about = "Manage AI model configurations")]
    Llm {
        #[command(subcommand)]
        command: LlmCommand,
    },

    #[command(about = "Edit, save, import and export SQL statements")]
    Sql {
        #[command(subcommand)]
        command: SqlCommand,
    },

    #[command(about = "Run and read AI reviews of the open statement")]
    Review {
        #[command(subcommand)]
        command: ReviewCommand,
    },

    #[command(about = "Browse, compare and restore versions of the open statement")]
    Version {
        #[command(subcommand)]
        command: VersionCommand,
    },

    #[command(about = "Explore the tables and views behind a connection")]
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },

    #[command(about = "Check that the review service is up")]
    Health,

    #[command(about = "Inspect or reset the saved selection state")]
    State {
        #[command(subcommand)]
        command: StateCommand,
    },
}

#[derive(Subcommand)]
pub enum ConnectionCommand {
    #[command(about = "List database connections")]
    List {
        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Start a blank connection draft")]
    New,

    #[command(about = "Select a connection and load it into the draft")]
    Edit { id: ConnectionId },

    #[command(
        about = "Save the draft (create when nothing is selected, update otherwise)"
    )]
    Save {
        #[command(flatten)]
        fields: ConnectionFields,
    },

    #[command(about = "Try the draft against the database without saving it")]
    Test {
        #[command(flatten)]
        fields: ConnectionFields,
    },

    #[command(about = "Delete a connection")]
    Delete { id: ConnectionId },
}

#[derive(Subcommand)]
pub enum LlmCommand {
    #[command(about = "List AI model configurations")]
    List {
        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Start a blank configuration draft")]
    New,

    #[command(about = "Select a configuration and load it into the draft")]
    Edit { id: LlmConfigId },

    #[command(
        about = "Save the draft (create when nothing is selected, update otherwise)"
    )]
    Save {
        #[command(flatten)]
        fields: LlmFields,
    },

    #[command(about = "Make a configuration the default for reviews")]
    SetDefault { id: LlmConfigId },

    #[command(about = "Send a test prompt through a configuration")]
    Test { id: LlmConfigId },

    #[command(about = "Delete a configuration")]
    Delete { id: LlmConfigId },
}

#[derive(Subcommand)]
pub enum SqlCommand {
    #[command(about = "List saved statements, newest first")]
    List {
        /// Page to show (defaults to the last page viewed)
        #[arg(long)]
        page: Option<u32>,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Clear the editor for a new statement")]
    New,

    #[command(about = "Load a statement into the editor with its latest review")]
    Open {
        id: SqlId,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Show the editor contents")]
    Show {
        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Change the editor contents")]
    Edit {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// SQL text
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the SQL text from a file
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long, conflicts_with = "no_connection")]
        connection: Option<ConnectionId>,

        /// Detach the statement from its connection
        #[arg(long)]
        no_connection: bool,
    },

    #[command(about = "Save the editor (create or update)")]
    Save,

    #[command(about = "Delete a statement")]
    Delete { id: SqlId },

    #[command(about = "Reformat the SQL in the editor")]
    Format,

    #[command(about = "Show the first rows of a CSV file before importing it")]
    ImportPreview { file: PathBuf },

    #[command(about = "Import statements from a CSV file")]
    Import {
        file: PathBuf,

        /// Connection assigned to every imported statement
        #[arg(long)]
        connection: Option<ConnectionId>,
    },

    #[command(about = "Export all statements to a dated CSV file")]
    Export {
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    #[command(about = "Show statement counts by status and database")]
    Stats,
}

#[derive(Subcommand)]
pub enum ReviewCommand {
    #[command(about = "Review the open statement")]
    Run {
        /// Model configuration (defaults to the server's default)
        #[arg(long)]
        llm: Option<LlmConfigId>,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "List past reviews of the open statement")]
    History {
        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Show a report (defaults to the one on screen)")]
    Show {
        #[arg(long)]
        report: Option<ReportId>,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Hide the report panel")]
    Hide,
}

#[derive(Subcommand)]
pub enum VersionCommand {
    #[command(about = "List versions of the open statement, newest first")]
    List {
        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Show the full content of one version")]
    View { id: VersionId },

    #[command(about = "Diff a version against the next-newer one")]
    Compare { id: VersionId },

    #[command(about = "Mark a version for restore")]
    Select { id: VersionId },

    #[command(about = "Restore the selected version")]
    Restore {
        /// Select this version first
        #[arg(long)]
        version: Option<VersionId>,
    },

    #[command(about = "Close the version panel")]
    Close,
}

#[derive(Subcommand)]
pub enum SchemaCommand {
    #[command(about = "List tables and views")]
    Tree {
        /// Defaults to the connection of the open statement
        #[arg(long)]
        connection: Option<ConnectionId>,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Show the columns and indexes of a table or view")]
    Object {
        kind: ObjectKind,

        name: String,

        #[arg(long)]
        connection: Option<ConnectionId>,

        #[command(flatten)]
        view: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum StateCommand {
    #[command(about = "Print the saved selection state")]
    Show,

    #[command(about = "Forget every selection and draft")]
    Reset,
}
