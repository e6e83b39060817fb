use crate::presentation::formatters::text::{indent, one_line, truncate};
use crate::presentation::formatters::time::format_local_opt;
use crate::presentation::view_models::{
    EditorViewModel, ExportViewModel, ImportPreviewViewModel, ImportResultViewModel,
    OpenedStatementViewModel, StatementListViewModel, StatisticsViewModel, ViewMode,
};
use owo_colors::OwoColorize;
use sqlreview_core::PageWindow;
use std::fmt;

use super::{ReportView, or_dash, statement_status_label};

// --------------------------------------------------------
// Statement List View
// --------------------------------------------------------

pub struct StatementListView<'a> {
    data: &'a StatementListViewModel,
    mode: ViewMode,
}

impl<'a> StatementListView<'a> {
    pub fn new(data: &'a StatementListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for s in &self.data.statements {
            writeln!(f, "{}", s.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for s in &self.data.statements {
            let marker = if s.is_open { "*" } else { " " };
            writeln!(
                f,
                "{} {:<5} {:<32} {:<9} {}",
                marker.yellow(),
                s.id,
                truncate(&s.title, 32),
                statement_status_label(s.status),
                format_local_opt(s.created_at.as_ref()).dimmed()
            )?;
        }
        self.render_navigation(f)
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for s in &self.data.statements {
            let marker = if s.is_open { "*" } else { " " };
            writeln!(
                f,
                "{} {} {}  {}",
                marker.yellow(),
                format!("#{}", s.id).cyan(),
                s.title.bold(),
                statement_status_label(s.status)
            )?;
            writeln!(f, "    {}", one_line(&s.sql_content, 96).dimmed())?;
        }
        self.render_navigation(f)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for s in &self.data.statements {
            writeln!(f, "{} {}", format!("#{}", s.id).cyan(), s.title.bold())?;
            writeln!(f, "  status:      {}", statement_status_label(s.status))?;
            writeln!(
                f,
                "  version:     {}",
                s.version.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
            )?;
            writeln!(
                f,
                "  connection:  {}",
                s.db_connection_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string())
            )?;
            writeln!(f, "  created:     {}", format_local_opt(s.created_at.as_ref()))?;
            writeln!(f, "  updated:     {}", format_local_opt(s.updated_at.as_ref()))?;
            writeln!(f, "{}", indent(&s.sql_content, "    "))?;
            writeln!(f)?;
        }
        self.render_navigation(f)
    }

    fn render_navigation(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(nav) = &self.data.navigation {
            writeln!(f)?;
            writeln!(f, "  {}", PageWindowView(nav))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for StatementListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

/// `‹ 1 2 [3] 4 5 ›`, with disabled arrows dimmed
struct PageWindowView<'a>(&'a PageWindow);

impl<'a> fmt::Display for PageWindowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let nav = self.0;
        if nav.is_first() {
            write!(f, "{}", "‹".dimmed())?;
        } else {
            write!(f, "‹")?;
        }
        for page in &nav.pages {
            if *page == nav.current {
                write!(f, " {}", format!("[{}]", page).bold())?;
            } else {
                write!(f, " {}", page)?;
            }
        }
        if nav.is_last() {
            write!(f, " {}", "›".dimmed())
        } else {
            write!(f, " ›")
        }
    }
}

// --------------------------------------------------------
// Editor View
// --------------------------------------------------------

pub struct EditorView<'a> {
    data: &'a EditorViewModel,
    mode: ViewMode,
}

impl<'a> EditorView<'a> {
    pub fn new(data: &'a EditorViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for EditorView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        if self.mode == ViewMode::Minimal {
            if let Some(id) = d.sql_id {
                writeln!(f, "{}", id)?;
            }
            return Ok(());
        }

        let id = d
            .sql_id
            .map(|id| format!("#{}", id))
            .unwrap_or_else(|| "unsaved".to_string());
        writeln!(f, "{} {}", id.cyan(), or_dash(Some(&d.title)).bold())?;
        if !d.description.is_empty() {
            writeln!(f, "  {}", d.description.dimmed())?;
        }
        if let Some(conn) = d.db_connection_id {
            writeln!(f, "  connection: {}", conn)?;
        }
        if self.mode == ViewMode::Verbose {
            let report = if d.report_visible { "shown" } else { "hidden" };
            writeln!(f, "  report:     {}", report)?;
        }
        writeln!(f)?;
        if d.content.is_empty() {
            writeln!(f, "  {}", "(empty)".dimmed())?;
        } else {
            writeln!(f, "{}", indent(&d.content, "  "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Opened Statement View
// --------------------------------------------------------

pub struct OpenedStatementView<'a> {
    data: &'a OpenedStatementViewModel,
    mode: ViewMode,
}

impl<'a> OpenedStatementView<'a> {
    pub fn new(data: &'a OpenedStatementViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for OpenedStatementView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", EditorView::new(&self.data.editor, self.mode))?;
        if self.mode == ViewMode::Minimal {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(
            f,
            "  status: {}  version: {}  reviews: {}",
            statement_status_label(self.data.status),
            self.data
                .version
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.data.review_count
        )?;

        if let Some(report) = &self.data.report {
            writeln!(f)?;
            write!(f, "{}", ReportView::new(report, self.mode))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// CSV Import Views
// --------------------------------------------------------

pub struct ImportPreviewView<'a> {
    data: &'a ImportPreviewViewModel,
    mode: ViewMode,
}

impl<'a> ImportPreviewView<'a> {
    pub fn new(data: &'a ImportPreviewViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ImportPreviewView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.rows.len());
        }

        let width = if self.mode == ViewMode::Verbose { 60 } else { 24 };
        let header: Vec<String> = self
            .data
            .headers
            .iter()
            .map(|h| format!("{:<width$}", truncate(h, width), width = width))
            .collect();
        writeln!(f, "  {}", header.join(" ").bold())?;

        for row in &self.data.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|c| {
                    format!(
                        "{:<width$}",
                        truncate(&one_line(c, width), width),
                        width = width
                    )
                })
                .collect();
            writeln!(f, "  {}", cells.join(" "))?;
        }
        Ok(())
    }
}

pub struct ImportResultView<'a> {
    data: &'a ImportResultViewModel,
    mode: ViewMode,
}

impl<'a> ImportResultView<'a> {
    pub fn new(data: &'a ImportResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ImportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.imported_count);
        }

        if let Some(message) = self.data.message.as_deref().filter(|m| !m.is_empty()) {
            writeln!(f, "  {}", message)?;
        }
        if !self.data.errors.is_empty() {
            writeln!(f, "  {}", "Rows not imported:".yellow())?;
            for error in &self.data.errors {
                writeln!(f, "    - {}", error)?;
            }
        }
        if let Some(list) = &self.data.statements {
            writeln!(f)?;
            write!(f, "{}", StatementListView::new(list, self.mode))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Export View
// --------------------------------------------------------

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
    mode: ViewMode,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.path.display()),
            _ => Ok(()),
        }
    }
}

// --------------------------------------------------------
// Statistics View
// --------------------------------------------------------

pub struct StatisticsView<'a> {
    data: &'a StatisticsViewModel,
    mode: ViewMode,
}

impl<'a> StatisticsView<'a> {
    pub fn new(data: &'a StatisticsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for StatisticsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total statements: {}", self.data.total_count.bold())?;
        if self.mode == ViewMode::Minimal {
            return Ok(());
        }

        writeln!(f, "\nBy status:")?;
        for (status, count) in &self.data.status_distribution {
            writeln!(f, "  {:<12} {}", status, count)?;
        }
        writeln!(f, "\nBy database:")?;
        for (db, count) in &self.data.database_distribution {
            writeln!(f, "  {:<12} {}", db, count)?;
        }
        Ok(())
    }
}
