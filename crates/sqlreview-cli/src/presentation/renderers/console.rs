use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        // Scripts reading --quiet output only want the content
        let minimal = self.mode == ViewMode::Minimal;

        if let Some(badge) = &result.badge {
            if minimal {
                if result.is_failure() {
                    eprintln!("{} {}", badge.icon(), badge.label);
                }
            } else {
                println!("{} {}", badge.icon(), badge.label.bold());
                println!();
            }
        }

        if !minimal {
            for note in &result.notes {
                println!("{} {}", note.icon(), note.label);
            }
            if !result.notes.is_empty() {
                println!();
            }
        }

        print!("{}", result.content.create_view(self.mode));

        if !minimal && !result.suggestions.is_empty() {
            println!("\n{}", "💡 Tips:".yellow().bold());
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", cmd.cyan());
                }
                println!();
            }
        }

        Ok(())
    }
}
