use super::args::{
    Cli, Commands, ConnectionCommand, LlmCommand, LogLevel, ReviewCommand, SchemaCommand,
    SqlCommand, StateCommand, VersionCommand,
};
use super::handlers::{self, HandlerContext};
use crate::args::OutputFormat;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use anyhow::Result;
use sqlreview_sdk::Controller;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// The action ran and its failure notice was rendered; only the exit code is left.
#[derive(Debug)]
pub struct ActionFailed;

impl fmt::Display for ActionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action failed")
    }
}

impl std::error::Error for ActionFailed {}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.server, cli.yes);
    let format = cli.format;

    let Some(command) = cli.command else {
        return handlers::system::guidance(&ctx, &HandlerContext::plain(format));
    };

    // Purely local; a corrupt state file must not block its own reset
    if let Commands::State { command } = &command {
        let hctx = HandlerContext::plain(format);
        return match command {
            StateCommand::Show => handlers::system::state_show(&ctx, &hctx),
            StateCommand::Reset => handlers::system::state_reset(&ctx, &hctx),
        };
    }

    let state = ctx.load_state()?;
    let mut ctrl = Controller::new(ctx.client()?, state, ctx.confirmer()?);
    tracing::debug!(server = %ctrl.client().base_url(), "dispatching");

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(dispatch(&mut ctrl, command, format));

    // Whatever the action selected is kept, even when rendering failed
    let failed = ctrl.has_failures();
    ctx.save_state(&ctrl.into_state())?;
    outcome?;

    if failed {
        return Err(ActionFailed.into());
    }
    Ok(())
}

fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_string()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn dispatch(ctrl: &mut Controller, command: Commands, format: OutputFormat) -> Result<()> {
    let plain = HandlerContext::plain(format);

    match command {
        Commands::Connection { command } => match command {
            ConnectionCommand::List { view } => {
                handlers::connection::list(ctrl, &HandlerContext::new(format, &view)).await
            }
            ConnectionCommand::New => handlers::connection::new(ctrl, &plain),
            ConnectionCommand::Edit { id } => handlers::connection::edit(ctrl, id, &plain).await,
            ConnectionCommand::Save { fields } => {
                handlers::connection::save(ctrl, fields, &plain).await
            }
            ConnectionCommand::Test { fields } => {
                handlers::connection::test(ctrl, fields, &plain).await
            }
            ConnectionCommand::Delete { id } => {
                handlers::connection::delete(ctrl, id, &plain).await
            }
        },

        Commands::Llm { command } => match command {
            LlmCommand::List { view } => {
                handlers::llm::list(ctrl, &HandlerContext::new(format, &view)).await
            }
            LlmCommand::New => handlers::llm::new(ctrl, &plain),
            LlmCommand::Edit { id } => handlers::llm::edit(ctrl, id, &plain).await,
            LlmCommand::Save { fields } => handlers::llm::save(ctrl, fields, &plain).await,
            LlmCommand::SetDefault { id } => handlers::llm::set_default(ctrl, id, &plain).await,
            LlmCommand::Test { id } => handlers::llm::test(ctrl, id, &plain).await,
            LlmCommand::Delete { id } => handlers::llm::delete(ctrl, id, &plain).await,
        },

        Commands::Sql { command } => match command {
            SqlCommand::List { page, view } => {
                handlers::sql::list(ctrl, page, &HandlerContext::new(format, &view)).await
            }
            SqlCommand::New => handlers::sql::new(ctrl, &plain),
            SqlCommand::Open { id, view } => {
                handlers::sql::open(ctrl, id, &HandlerContext::new(format, &view)).await
            }
            SqlCommand::Show { view } => {
                handlers::sql::show(ctrl, &HandlerContext::new(format, &view))
            }
            SqlCommand::Edit {
                title,
                description,
                content,
                file,
                connection,
                no_connection,
            } => {
                let changes = handlers::sql::EditorChanges {
                    title,
                    description,
                    content,
                    file,
                    connection,
                    no_connection,
                };
                handlers::sql::edit(ctrl, changes, &plain)
            }
            SqlCommand::Save => handlers::sql::save(ctrl, &plain).await,
            SqlCommand::Delete { id } => handlers::sql::delete(ctrl, id, &plain).await,
            SqlCommand::Format => handlers::sql::format(ctrl, &plain),
            SqlCommand::ImportPreview { file } => {
                handlers::sql::import_preview(ctrl, &file, &plain)
            }
            SqlCommand::Import { file, connection } => {
                handlers::sql::import(ctrl, &file, connection, &plain).await
            }
            SqlCommand::Export { dir } => handlers::sql::export(ctrl, dir, &plain).await,
            SqlCommand::Stats => handlers::sql::stats(ctrl, &plain).await,
        },

        Commands::Review { command } => match command {
            ReviewCommand::Run { llm, view } => {
                handlers::review::run(ctrl, llm, &HandlerContext::new(format, &view)).await
            }
            ReviewCommand::History { view } => {
                handlers::review::history(ctrl, &HandlerContext::new(format, &view)).await
            }
            ReviewCommand::Show { report, view } => {
                handlers::review::show(ctrl, report, &HandlerContext::new(format, &view)).await
            }
            ReviewCommand::Hide => handlers::review::hide(ctrl, &plain),
        },

        Commands::Version { command } => match command {
            VersionCommand::List { view } => {
                handlers::version::list(ctrl, &HandlerContext::new(format, &view)).await
            }
            VersionCommand::View { id } => handlers::version::view(ctrl, id, &plain).await,
            VersionCommand::Compare { id } => handlers::version::compare(ctrl, id, &plain).await,
            VersionCommand::Select { id } => handlers::version::select(ctrl, id, &plain).await,
            VersionCommand::Restore { version } => {
                handlers::version::restore(ctrl, version, &plain).await
            }
            VersionCommand::Close => handlers::version::close(ctrl, &plain),
        },

        Commands::Schema { command } => match command {
            SchemaCommand::Tree { connection, view } => {
                handlers::schema::tree(ctrl, connection, &HandlerContext::new(format, &view)).await
            }
            SchemaCommand::Object {
                kind,
                name,
                connection,
                view,
            } => {
                let hctx = HandlerContext::new(format, &view);
                handlers::schema::object(ctrl, kind, &name, connection, &hctx).await
            }
        },

        Commands::Health => handlers::system::health(ctrl, &plain).await,

        // Handled in `run` before the controller exists
        Commands::State { .. } => Ok(()),
    }
}
