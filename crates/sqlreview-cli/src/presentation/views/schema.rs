use crate::presentation::view_models::{
    ObjectDetailsViewModel, SchemaObjectViewModel, SchemaTreeViewModel, ViewMode,
};
use owo_colors::OwoColorize;
use std::fmt;

use super::or_dash;

// --------------------------------------------------------
// Schema Tree View
// --------------------------------------------------------

pub struct SchemaTreeView<'a> {
    data: &'a SchemaTreeViewModel,
    mode: ViewMode,
}

impl<'a> SchemaTreeView<'a> {
    pub fn new(data: &'a SchemaTreeViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_group(
        &self,
        f: &mut fmt::Formatter,
        label: &str,
        objects: &[SchemaObjectViewModel],
    ) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for o in objects {
                writeln!(f, "{}", o.name)?;
            }
            return Ok(());
        }

        writeln!(f, "{} ({})", label.bold(), objects.len())?;
        for (index, o) in objects.iter().enumerate() {
            let branch = if index + 1 == objects.len() { "└─" } else { "├─" };
            match (&o.comment, self.mode) {
                (Some(comment), ViewMode::Standard | ViewMode::Verbose) => {
                    writeln!(f, "  {} {}  {}", branch, o.name, comment.dimmed())?
                }
                _ => writeln!(f, "  {} {}", branch, o.name)?,
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SchemaTreeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        if self.mode != ViewMode::Minimal {
            let name = d
                .connection_name
                .clone()
                .unwrap_or_else(|| format!("connection {}", d.connection_id));
            write!(f, "{}", name.cyan())?;
            if let Some(db_type) = &d.db_type {
                write!(f, "  {}", db_type)?;
            }
            if let Some(db) = &d.database_name {
                write!(f, "  {}", db.dimmed())?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }

        self.render_group(f, "Tables", &d.tables)?;
        if self.mode != ViewMode::Minimal {
            writeln!(f)?;
        }
        self.render_group(f, "Views", &d.views)
    }
}

// --------------------------------------------------------
// Object Details View
// --------------------------------------------------------

pub struct ObjectDetailsView<'a> {
    data: &'a ObjectDetailsViewModel,
    mode: ViewMode,
}

impl<'a> ObjectDetailsView<'a> {
    pub fn new(data: &'a ObjectDetailsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ObjectDetailsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        if self.mode == ViewMode::Minimal {
            for c in &d.columns {
                writeln!(f, "{}", c.name)?;
            }
            return Ok(());
        }

        writeln!(f, "{} {}", d.kind, d.name.bold())?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:<24} {:<18} {:<8} {:<14} {}",
            "COLUMN".bold(),
            "TYPE".bold(),
            "NULL".bold(),
            "DEFAULT".bold(),
            "COMMENT".bold()
        )?;
        for c in &d.columns {
            writeln!(
                f,
                "  {:<24} {:<18} {:<8} {:<14} {}",
                c.name,
                c.data_type,
                if c.nullable { "yes" } else { "no" },
                or_dash(c.default.as_deref()),
                or_dash(c.comment.as_deref()).dimmed()
            )?;
        }

        if d.indexes.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{}", "Indexes".bold())?;
        for i in &d.indexes {
            let unique = if i.unique { " unique".yellow().to_string() } else { String::new() };
            let kind = match (&i.index_type, self.mode) {
                (Some(kind), ViewMode::Verbose) => format!(" {}", kind.dimmed()),
                _ => String::new(),
            };
            writeln!(f, "  {} ({}){}{}", i.name, i.columns.join(", "), unique, kind)?;
        }
        Ok(())
    }
}
