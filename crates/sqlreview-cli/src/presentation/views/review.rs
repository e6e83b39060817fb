use crate::presentation::formatters::text::indent;
use crate::presentation::formatters::time::{format_local_opt, format_relative};
use crate::presentation::view_models::{
    ReportViewModel, ReviewHistoryViewModel, SectionViewModel, ViewMode,
};
use owo_colors::OwoColorize;
use sqlreview_core::review::{ScoreBand, section_title, status_label};
use std::fmt;

use super::{or_dash, paint_band};

fn score_text(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.0}", score),
        None => "-".to_string(),
    }
}

/// Right-aligned score, padded before painting so escape codes don't count
/// toward the width.
fn score_cell(score: Option<f64>, band: ScoreBand) -> String {
    paint_band(band, &format!("{:>4}", score_text(score)))
}

// --------------------------------------------------------
// Report View
// --------------------------------------------------------

pub struct ReportView<'a> {
    data: &'a ReportViewModel,
    mode: ViewMode,
}

impl<'a> ReportView<'a> {
    pub fn new(data: &'a ReportViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(id) = self.data.report_id {
            writeln!(f, "{}", id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        for section in &self.data.sections {
            writeln!(
                f,
                "  {:<20} {}  {}",
                section_title(section.section),
                score_cell(section.score, section.band),
                status_label(section.status)
            )?;
        }
        self.render_optimized(f)
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        for section in &self.data.sections {
            self.render_section(f, section, false)?;
        }
        self.render_optimized(f)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        for section in &self.data.sections {
            self.render_section(f, section, true)?;
        }
        self.render_optimized(f)
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = self
            .data
            .report_id
            .map(|id| format!("Report #{}", id))
            .unwrap_or_else(|| "Report".to_string());
        write!(f, "{}", id.bold())?;

        let model = match (&self.data.llm_provider, &self.data.llm_model) {
            (Some(provider), Some(model)) => Some(format!("{}/{}", provider, model)),
            (None, Some(model)) => Some(model.clone()),
            (Some(provider), None) => Some(provider.clone()),
            (None, None) => None,
        };
        if let Some(model) = model {
            write!(f, "  {}", model.dimmed())?;
        }
        if let Some(created) = &self.data.created_at {
            write!(f, "  {}", format_relative(created).dimmed())?;
        }
        writeln!(f)?;
        writeln!(f)
    }

    fn render_section(
        &self,
        f: &mut fmt::Formatter,
        section: &SectionViewModel,
        full: bool,
    ) -> fmt::Result {
        writeln!(
            f,
            "{}  {}  {}",
            section_title(section.section).bold(),
            paint_band(section.band, &score_text(section.score)),
            status_label(section.status).dimmed()
        )?;
        if let Some(summary) = section.summary.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "{}", indent(summary, "  "))?;
        }
        if full || section.summary.is_none() {
            if let Some(details) = section.details.as_deref().filter(|s| !s.is_empty()) {
                writeln!(f, "{}", indent(details, "  "))?;
            }
        }
        if let Some(suggestions) = section.suggestions.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "  {} {}", "→".cyan(), suggestions)?;
        }
        writeln!(f)
    }

    fn render_optimized(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(sql) = &self.data.optimized_sql {
            writeln!(f, "{}", "Optimized SQL".bold())?;
            writeln!(f, "{}", indent(sql, "  ").green())?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Review History View
// --------------------------------------------------------

pub struct ReviewHistoryView<'a> {
    data: &'a ReviewHistoryViewModel,
    mode: ViewMode,
}

impl<'a> ReviewHistoryView<'a> {
    pub fn new(data: &'a ReviewHistoryViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ReviewHistoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in &self.data.reports {
            if self.mode == ViewMode::Minimal {
                writeln!(f, "{}", r.report_id)?;
                continue;
            }

            let marker = if r.is_displayed { "*" } else { " " };
            let model = or_dash(r.llm_model.as_deref());
            writeln!(
                f,
                "{} {:<5} {}  {:<18} {:<20} {}",
                marker.yellow(),
                r.report_id,
                score_cell(r.overall_score, r.band),
                status_label(r.overall_status),
                model,
                format_local_opt(r.created_at.as_ref()).dimmed()
            )?;
            if self.mode == ViewMode::Verbose {
                writeln!(f, "        provider: {}", or_dash(r.llm_provider.as_deref()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_cell_pads_inside_color() {
        let cell = score_cell(Some(80.0), ScoreBand::Blue);
        assert_eq!(cell, "  80".blue().to_string());

        let missing = score_cell(None, ScoreBand::Red);
        assert_eq!(missing, "   -".red().to_string());
    }
}
