use crate::presentation::view_models::{
    GuidanceViewModel, HealthViewModel, StateViewModel, ViewMode,
};
use owo_colors::OwoColorize;
use std::fmt;

// --------------------------------------------------------
// Health View
// --------------------------------------------------------

pub struct HealthView<'a> {
    data: &'a HealthViewModel,
    mode: ViewMode,
}

impl<'a> HealthView<'a> {
    pub fn new(data: &'a HealthViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for HealthView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.status);
        }

        writeln!(f, "  server:   {}", d.server.cyan())?;
        writeln!(f, "  status:   {}", d.status)?;
        if let Some(app) = &d.app_name {
            writeln!(f, "  app:      {}", app)?;
        }
        if let Some(version) = &d.version {
            writeln!(f, "  version:  {}", version)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// State View
// --------------------------------------------------------

pub struct StateView<'a> {
    data: &'a StateViewModel,
    mode: ViewMode,
}

impl<'a> StateView<'a> {
    pub fn new(data: &'a StateViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

fn id_or_dash(id: Option<impl fmt::Display>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

impl<'a> fmt::Display for StateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = &self.data.state;
        if self.mode == ViewMode::Verbose {
            writeln!(f, "{}", self.data.state_file.display().to_string().dimmed())?;
        }

        writeln!(f, "  statement:   {}", id_or_dash(s.current_sql_id))?;
        writeln!(f, "  page:        {}", s.current_sql_page)?;
        writeln!(f, "  report:      {}", id_or_dash(s.current_report_id))?;
        writeln!(f, "  connection:  {}", id_or_dash(s.current_connection_id))?;
        writeln!(f, "  model:       {}", id_or_dash(s.current_llm_config_id))?;
        writeln!(f, "  review:      {}", review_label(&s.review))?;
        writeln!(f, "  versions:    {}", versions_label(&s.versions))?;

        let title = if s.editor.title.is_empty() {
            "(untitled)"
        } else {
            s.editor.title.as_str()
        };
        let lines = s.editor.content.lines().count();
        writeln!(f, "  editor:      {} ({} lines)", title, lines)?;
        Ok(())
    }
}

fn review_label(review: &sqlreview_core::ReviewWorkflow) -> String {
    use sqlreview_core::ReviewWorkflow;
    match review {
        ReviewWorkflow::Idle => "idle".to_string(),
        ReviewWorkflow::Pending { sql_id } => format!("pending for {}", sql_id),
        ReviewWorkflow::Displayed { sql_id, report_id } => match report_id {
            Some(report) => format!("showing report {} of {}", report, sql_id),
            None => format!("showing report of {}", sql_id),
        },
    }
}

fn versions_label(versions: &sqlreview_core::VersionWorkflow) -> String {
    use sqlreview_core::VersionWorkflow;
    match versions {
        VersionWorkflow::Closed => "closed".to_string(),
        VersionWorkflow::Listing { sql_id } => format!("listing {}", sql_id),
        VersionWorkflow::Viewing { version_id, .. } => format!("viewing {}", version_id),
        VersionWorkflow::Comparing { older, newer, .. } => {
            format!("comparing {} with {}", older, newer)
        }
        VersionWorkflow::Selected { version_id, .. } => format!("{} selected", version_id),
        VersionWorkflow::Restoring { version_id, .. } => format!("restoring {}", version_id),
    }
}

// --------------------------------------------------------
// Guidance View
// --------------------------------------------------------

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    mode: ViewMode,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return Ok(());
        }

        writeln!(f, "sqlreview - AI review workbench for SQL statements\n")?;
        writeln!(f, "  server:     {}", self.data.server.cyan())?;
        match (self.data.open_statement, &self.data.open_title) {
            (Some(id), Some(title)) => writeln!(f, "  open:       #{} {}", id, title)?,
            (Some(id), None) => writeln!(f, "  open:       #{}", id)?,
            _ => writeln!(f, "  open:       {}", "nothing".dimmed())?,
        }
        Ok(())
    }
}
