// NOTE: sqlreview Architecture Rationale
//
// Why persist selection state between invocations?
// - Each CLI invocation is one user action (open, save, review, restore)
// - Actions depend on what the previous one selected: the open statement,
//   the selected version, the connection being edited
// - state.json is the only thing carried over; drafts never hold secrets
//
// Why notices instead of errors?
// - A failed request is an outcome the user has to see, not a crash
// - The controller records it; the renderer shows it as the status badge
// - The process still exits non-zero so scripts can react

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod presentation;

pub use args::{
    Cli, Commands, ConnectionCommand, LlmCommand, ReviewCommand, SchemaCommand, SqlCommand,
    StateCommand, VersionCommand,
};
pub use commands::{ActionFailed, run};
