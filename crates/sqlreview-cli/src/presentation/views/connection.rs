use crate::presentation::view_models::{
    ConnectionDraftViewModel, ConnectionListViewModel, ConnectionTestViewModel, ViewMode,
};
use owo_colors::OwoColorize;
use std::fmt;

use super::or_dash;

// --------------------------------------------------------
// Connection List View
// --------------------------------------------------------

pub struct ConnectionListView<'a> {
    data: &'a ConnectionListViewModel,
    mode: ViewMode,
}

impl<'a> ConnectionListView<'a> {
    pub fn new(data: &'a ConnectionListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.data.connections {
            writeln!(f, "{}", c.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "  {:<5} {:<24} {:<11} {}",
            "ID".bold(),
            "NAME".bold(),
            "TYPE".bold(),
            "TARGET".bold()
        )?;
        for c in &self.data.connections {
            let marker = if c.is_selected { "*" } else { " " };
            let target = match (&c.host, c.port) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.clone(),
                _ => "-".to_string(),
            };
            let target = match &c.database_name {
                Some(db) if !db.is_empty() => format!("{}/{}", target, db),
                _ => target,
            };
            writeln!(
                f,
                "{} {:<5} {:<24} {:<11} {}",
                marker.yellow(),
                c.id,
                c.name,
                c.db_type.to_string(),
                target.dimmed()
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.data.connections {
            let selected = if c.is_selected { " (selected)" } else { "" };
            writeln!(f, "{} {}{}", format!("#{}", c.id).cyan(), c.name.bold(), selected)?;
            writeln!(f, "  type:      {}", c.db_type)?;
            writeln!(f, "  host:      {}", or_dash(c.host.as_deref()))?;
            writeln!(
                f,
                "  port:      {}",
                c.port.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
            )?;
            writeln!(f, "  database:  {}", or_dash(c.database_name.as_deref()))?;
            writeln!(f, "  username:  {}", or_dash(c.username.as_deref()))?;
            writeln!(f, "  note:      {}", or_dash(c.description.as_deref()))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ConnectionListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact | ViewMode::Standard => self.render_compact(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Connection Draft View
// --------------------------------------------------------

pub struct ConnectionDraftView<'a> {
    data: &'a ConnectionDraftViewModel,
    mode: ViewMode,
}

impl<'a> ConnectionDraftView<'a> {
    pub fn new(data: &'a ConnectionDraftViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConnectionDraftView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            if let Some(id) = self.data.selected_id {
                writeln!(f, "{}", id)?;
            }
            return Ok(());
        }

        let d = &self.data.draft;
        writeln!(f, "  name:      {}", or_dash(Some(&d.name)))?;
        writeln!(
            f,
            "  type:      {}",
            d.db_type.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
        )?;
        writeln!(f, "  host:      {}", or_dash(d.host.as_deref()))?;
        writeln!(
            f,
            "  port:      {}",
            d.port.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
        )?;
        writeln!(f, "  database:  {}", or_dash(d.database_name.as_deref()))?;
        writeln!(f, "  username:  {}", or_dash(d.username.as_deref()))?;
        writeln!(f, "  password:  {}", "(not stored)".dimmed())?;
        writeln!(f, "  note:      {}", or_dash(d.description.as_deref()))?;
        Ok(())
    }
}

// --------------------------------------------------------
// Connection Test View
// --------------------------------------------------------

pub struct ConnectionTestView<'a> {
    data: &'a ConnectionTestViewModel,
    mode: ViewMode,
}

impl<'a> ConnectionTestView<'a> {
    pub fn new(data: &'a ConnectionTestViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConnectionTestView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.success),
            _ => {
                let verdict = if self.data.success {
                    "reachable".green().to_string()
                } else {
                    "unreachable".red().to_string()
                };
                writeln!(f, "  {} {}", self.data.target, verdict)
            }
        }
    }
}
