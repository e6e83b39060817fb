mod connection;
mod llm;
mod review;
mod schema;
mod statement;
mod system;
mod version;

pub use connection::*;
pub use llm::*;
pub use review::*;
pub use schema::*;
pub use statement::*;
pub use system::*;
pub use version::*;

use owo_colors::OwoColorize;
use sqlreview_core::ScoreBand;
use sqlreview_types::StatementStatus;
use std::fmt;

/// Renders nothing
pub struct EmptyView;

impl fmt::Display for EmptyView {
    fn fmt(&self, _f: &mut fmt::Formatter) -> fmt::Result {
        Ok(())
    }
}

/// Text in the color of its score band
pub(crate) fn paint_band(band: ScoreBand, text: &str) -> String {
    match band {
        ScoreBand::Green => text.green().to_string(),
        ScoreBand::Blue => text.blue().to_string(),
        ScoreBand::Orange => text.truecolor(253, 126, 20).to_string(),
        ScoreBand::Red => text.red().to_string(),
    }
}

pub(crate) fn statement_status_label(status: StatementStatus) -> String {
    match status {
        StatementStatus::Draft => "draft".dimmed().to_string(),
        StatementStatus::Reviewed => "reviewed".blue().to_string(),
        StatementStatus::Approved => "approved".green().to_string(),
        StatementStatus::Rejected => "rejected".red().to_string(),
        StatementStatus::Unknown => "unknown".dimmed().to_string(),
    }
}

pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}
