use anyhow::{Context, Result};

use praxis::model::Settings;
use praxis::remote::RemoteClient;
use praxis::session::Session;
use praxis::store::ClientStore;
use praxis::tool::ToolRunner;
use praxis::workspace::ExerciseCache;

use crate::Commands;

mod catalog;
mod panes_out;
mod selection;
mod setup;
mod solution;

use catalog::{handle_exercises_command, handle_tracks_command};
use panes_out::StdoutPanes;
use selection::{
    handle_exercise_command, handle_open_command, handle_show_tests_command, handle_track_command,
};
use setup::handle_configure_command;
use solution::{handle_solution_action, handle_submit_command, handle_test_command};

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Configure {
            token,
            workspace,
            api_base_url,
            tool,
        } => handle_configure_command(token, workspace, api_base_url, tool)?,
        Commands::Tracks { json } => handle_tracks_command(json)?,
        Commands::Exercises { track, json } => handle_exercises_command(track, json)?,
        Commands::Track { slug } => handle_track_command(&slug)?,
        Commands::Exercise { slug } => handle_exercise_command(&slug)?,
        Commands::Open { exercise } => handle_open_command(exercise)?,
        Commands::ShowTests { exercise } => handle_show_tests_command(exercise)?,
        Commands::Test { exercise } => handle_test_command(exercise)?,
        Commands::Submit { exercise } => handle_submit_command(exercise)?,
        Commands::Complete { exercise } => {
            handle_solution_action(praxis::actions::SolutionAction::Complete, exercise)?
        }
        Commands::Publish { exercise } => {
            handle_solution_action(praxis::actions::SolutionAction::Publish, exercise)?
        }
        Commands::Unpublish { exercise } => {
            handle_solution_action(praxis::actions::SolutionAction::Unpublish, exercise)?
        }
    }
    Ok(())
}

/// Everything a configured command needs: settings, session and the
/// workspace cache wired to the companion tool.
pub(crate) struct AppCtx {
    pub(crate) settings: Settings,
    pub(crate) session: Session,
    pub(crate) cache: ExerciseCache,
}

pub(crate) fn load_ctx() -> Result<AppCtx> {
    let store = ClientStore::open(ClientStore::default_dir()?);
    let settings = store.read_settings()?;
    let session = Session::load(store, settings.workspace.clone())
        .context("load session state")?;
    let cache = ExerciseCache::new(
        settings.workspace.clone(),
        ToolRunner::new(settings.tool_program()),
    );
    Ok(AppCtx {
        settings,
        session,
        cache,
    })
}

pub(crate) fn remote_client(settings: &Settings) -> Result<RemoteClient> {
    Ok(RemoteClient::new(
        settings.api_base_url(),
        Some(settings.token.clone()),
    )?)
}
