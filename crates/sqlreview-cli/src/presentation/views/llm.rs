use crate::presentation::view_models::{
    LlmConfigListViewModel, LlmDraftViewModel, LlmTestViewModel, ViewMode,
};
use owo_colors::OwoColorize;
use std::fmt;

use super::or_dash;

// --------------------------------------------------------
// Model Configuration List View
// --------------------------------------------------------

pub struct LlmListView<'a> {
    data: &'a LlmConfigListViewModel,
    mode: ViewMode,
}

impl<'a> LlmListView<'a> {
    pub fn new(data: &'a LlmConfigListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.data.configs {
            writeln!(f, "{}", c.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.data.configs {
            let default = if c.is_default {
                " [default]".green().to_string()
            } else {
                String::new()
            };
            writeln!(
                f,
                "  {:<5} {:<24} {}/{}{}",
                c.id,
                c.name,
                c.provider,
                c.model_name.cyan(),
                default
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.data.configs {
            let mut flags = Vec::new();
            if c.is_default {
                flags.push("default");
            }
            if c.is_selected {
                flags.push("selected");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", "))
            };

            writeln!(f, "{} {}{}", format!("#{}", c.id).cyan(), c.name.bold(), flags)?;
            writeln!(f, "  provider:     {}", c.provider)?;
            writeln!(f, "  model:        {}", c.model_name)?;
            writeln!(f, "  base url:     {}", or_dash(c.base_url.as_deref()))?;
            writeln!(
                f,
                "  temperature:  {}",
                c.temperature
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string())
            )?;
            writeln!(
                f,
                "  max tokens:   {}",
                c.max_tokens
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string())
            )?;
            writeln!(f, "  note:         {}", or_dash(c.description.as_deref()))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for LlmListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact | ViewMode::Standard => self.render_compact(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Model Configuration Draft View
// --------------------------------------------------------

pub struct LlmDraftView<'a> {
    data: &'a LlmDraftViewModel,
    mode: ViewMode,
}

impl<'a> LlmDraftView<'a> {
    pub fn new(data: &'a LlmDraftViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for LlmDraftView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            if let Some(id) = self.data.selected_id {
                writeln!(f, "{}", id)?;
            }
            return Ok(());
        }

        let d = &self.data.draft;
        writeln!(f, "  name:         {}", or_dash(Some(&d.name)))?;
        writeln!(
            f,
            "  provider:     {}",
            d.provider
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string())
        )?;
        writeln!(f, "  model:        {}", or_dash(Some(&d.model_name)))?;
        writeln!(f, "  api key:      {}", "(not stored)".dimmed())?;
        writeln!(f, "  base url:     {}", or_dash(d.base_url.as_deref()))?;
        writeln!(f, "  note:         {}", or_dash(d.description.as_deref()))?;
        Ok(())
    }
}

// --------------------------------------------------------
// Model Configuration Test View
// --------------------------------------------------------

pub struct LlmTestView<'a> {
    data: &'a LlmTestViewModel,
    mode: ViewMode,
}

impl<'a> LlmTestView<'a> {
    pub fn new(data: &'a LlmTestViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for LlmTestView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.success),
            _ => Ok(()),
        }
    }
}
