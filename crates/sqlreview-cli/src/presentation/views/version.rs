use crate::presentation::formatters::text::{indent, one_line};
use crate::presentation::formatters::time::format_local_opt;
use crate::presentation::view_models::{
    RestoreViewModel, VersionDetailViewModel, VersionDiffViewModel, VersionListViewModel,
    ViewMode,
};
use owo_colors::OwoColorize;
use sqlreview_core::versions::DiffTag;
use std::fmt;

use super::{EditorView, or_dash};

// --------------------------------------------------------
// Version List View
// --------------------------------------------------------

pub struct VersionListView<'a> {
    data: &'a VersionListViewModel,
    mode: ViewMode,
}

impl<'a> VersionListView<'a> {
    pub fn new(data: &'a VersionListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for VersionListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in &self.data.versions {
            if self.mode == ViewMode::Minimal {
                writeln!(f, "{}", v.id)?;
                continue;
            }

            let marker = if v.is_selected { "*" } else { " " };
            let mut tags = Vec::new();
            if v.is_newest {
                tags.push("latest".green().to_string());
            }
            if v.is_current && !v.is_newest {
                tags.push("current".blue().to_string());
            }
            if let Some(newer) = v.compare_with {
                tags.push(format!("compare with {}", newer).dimmed().to_string());
            }

            writeln!(
                f,
                "{} {:<5} v{:<4} {:<17} {}",
                marker.yellow(),
                v.id,
                v.version,
                format_local_opt(v.created_at.as_ref()),
                tags.join("  ")
            )?;

            match self.mode {
                ViewMode::Standard => {
                    let sql = v.sql_content.as_deref().unwrap_or_default();
                    writeln!(f, "        {}", one_line(sql, 88).dimmed())?;
                }
                ViewMode::Verbose => {
                    writeln!(f, "        title: {}", or_dash(v.title.as_deref()))?;
                    let sql = v.sql_content.as_deref().unwrap_or_default();
                    writeln!(f, "{}", indent(sql, "        "))?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Version Detail View
// --------------------------------------------------------

pub struct VersionDetailView<'a> {
    data: &'a VersionDetailViewModel,
    mode: ViewMode,
}

impl<'a> VersionDetailView<'a> {
    pub fn new(data: &'a VersionDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for VersionDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.sql_content.as_deref().unwrap_or_default());
        }

        writeln!(
            f,
            "{} {}  {}",
            format!("Version {}", d.version).bold(),
            or_dash(d.title.as_deref()),
            format_local_opt(d.created_at.as_ref()).dimmed()
        )?;
        if let Some(description) = d.description.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "  {}", description.dimmed())?;
        }
        writeln!(f)?;
        writeln!(f, "{}", indent(d.sql_content.as_deref().unwrap_or_default(), "  "))
    }
}

// --------------------------------------------------------
// Version Diff View
// --------------------------------------------------------

pub struct VersionDiffView<'a> {
    data: &'a VersionDiffViewModel,
    mode: ViewMode,
}

impl<'a> VersionDiffView<'a> {
    pub fn new(data: &'a VersionDiffViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for VersionDiffView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            "{}",
            format!("--- v{} (#{})", d.older_version, d.older_id).red()
        )?;
        writeln!(
            f,
            "{}",
            format!("+++ v{} (#{})", d.newer_version, d.newer_id).green()
        )?;

        for line in &d.lines {
            match line.tag {
                DiffTag::Delete => writeln!(f, "{}", format!("-{}", line.text).red())?,
                DiffTag::Insert => writeln!(f, "{}", format!("+{}", line.text).green())?,
                DiffTag::Equal if self.mode != ViewMode::Minimal => {
                    writeln!(f, " {}", line.text)?
                }
                DiffTag::Equal => {}
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Restore View
// --------------------------------------------------------

pub struct RestoreView<'a> {
    data: &'a RestoreViewModel,
    mode: ViewMode,
}

impl<'a> RestoreView<'a> {
    pub fn new(data: &'a RestoreViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for RestoreView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.editor {
            Some(editor) => write!(f, "{}", EditorView::new(editor, self.mode)),
            None => Ok(()),
        }
    }
}
