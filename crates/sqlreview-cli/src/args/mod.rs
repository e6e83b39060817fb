// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - Each namespace mirrors one panel of the review workbench
//   (connection, llm, sql, review, version, schema)
// - Improves --help discoverability and conceptual clarity
// - Example: `version select 4` then `version restore` reads like the UI flow

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sqlreview")]
#[command(
    about = "Manage, review and version SQL statements against an AI review service",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and state.json
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Base URL of the review service
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
