use clap::Args;
use sqlreview_types::{DbType, LlmProvider};

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all fields)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Field flags of a connection draft. Unset flags keep the draft's value.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long = "type", value_name = "DB_TYPE")]
    pub db_type: Option<DbType>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long = "database", value_name = "NAME")]
    pub database_name: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    /// Sent with this request only, never stored
    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

/// Field flags of an AI model configuration draft
#[derive(Debug, Clone, Default, Args)]
pub struct LlmFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub provider: Option<LlmProvider>,

    #[arg(long = "model", value_name = "MODEL_NAME")]
    pub model_name: Option<String>,

    /// Sent with this request only, never stored
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub temperature: Option<f64>,

    #[arg(long)]
    pub max_tokens: Option<u32>,

    #[arg(long)]
    pub description: Option<String>,
}
