//! Client-side controller logic for the SQL review service.
//!
//! Nothing in this crate performs I/O. It owns the selection state that
//! survives between user actions, the two explicit workflows (review and
//! version history), and the small helpers the controller applies before or
//! after a request: pagination windows, CSV previews, SQL formatting and form
//! validation.

pub mod csv_preview;
pub mod error;
pub mod export;
pub mod notice;
pub mod pagination;
pub mod review;
pub mod sql_format;
pub mod state;
pub mod validation;
pub mod versions;

pub use csv_preview::{CsvPreview, ImportDialog};
pub use export::export_file_name_today;
pub use error::{Error, Result};
pub use notice::{Notice, NoticeLevel};
pub use pagination::{PageWindow, SQL_PAGE_SIZE};
pub use review::{ReviewWorkflow, ScoreBand};
pub use sql_format::format_sql;
pub use state::{EditorBuffer, UiSelectionState};
pub use versions::{RestoreTicket, VersionDiff, VersionEntry, VersionWorkflow};
