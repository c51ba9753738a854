//! Orchestration workflows: track/exercise selection and the gated
//! per-exercise actions.
//!
//! Selection moves through no-track, track-selected, exercise-selected; a
//! failing step reverts to the prior state with the session's optional
//! fields cleared. Each workflow takes the session's single-workflow guard
//! before doing anything else.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::panes::Panes;
use crate::session::Session;
use crate::workspace::ExerciseCache;

/// Smoke exercise materialized when a track is selected for the first time.
/// Verifies the tool can reach the track and creates the track directory.
pub const BOOTSTRAP_EXERCISE: &str = "hello-world";

const DESCRIPTION_FILE: &str = "README.md";

/// Enters the track-selected state. A track whose local directory does not
/// exist yet is bootstrapped via the smoke exercise; only after that
/// succeeds is the slug recorded and persisted. On failure the previous
/// track (set or unset) stays as it was.
pub fn choose_track(session: &mut Session, cache: &ExerciseCache, slug: &str) -> Result<()> {
    let _guard = session.begin_workflow("set track")?;
    if !cache.track_dir_exists(slug) {
        cache.setup_exercise(session, slug, BOOTSTRAP_EXERCISE)?;
    }
    if let Err(err) = session.set_track(slug) {
        // Track selection failed after a possible bootstrap; drop the
        // bootstrap exercise so the session reverts to its prior state.
        session.clear_exercise();
        return Err(err);
    }
    // An exercise carried over from another track no longer belongs to the
    // session.
    if session
        .exercise()
        .is_some_and(|ctx| ctx.metadata.track != slug)
    {
        session.clear_exercise();
    }
    tracing::debug!(track = slug, "track selected");
    Ok(())
}

/// Enters the exercise-selected state. Requires a current track; on failure
/// the exercise fields are cleared and the error propagates without
/// panicking.
pub fn choose_exercise(
    session: &mut Session,
    cache: &ExerciseCache,
    slug: &str,
) -> Result<PathBuf> {
    let _guard = session.begin_workflow("set exercise")?;
    let track = session.require_track()?.to_string();
    let dir = cache.setup_exercise(session, &track, slug)?;
    tracing::debug!(track, exercise = slug, "exercise selected");
    Ok(dir)
}

/// Directory of the currently selected exercise. Gated; never downloads.
pub fn current_exercise_dir(session: &Session, cache: &ExerciseCache) -> Result<PathBuf> {
    let ctx = session.require_exercise()?;
    Ok(cache.exercise_dir(&ctx.metadata.track, &ctx.metadata.exercise))
}

/// Re-enters the coding session for the already-selected exercise: shows
/// the description and the first solution file. Idempotent; performs no
/// download and no re-selection.
pub fn open_current(
    session: &Session,
    cache: &ExerciseCache,
    panes: &mut dyn Panes,
) -> Result<()> {
    let _guard = session.begin_workflow("open")?;
    let dir = current_exercise_dir(session, cache)?;
    let ctx = session.require_exercise()?;
    let solution = ctx.manifest.first_solution_file()?;

    panes.show_description(&read_or_placeholder(&dir.join(DESCRIPTION_FILE)));
    let solution_path = dir.join(solution);
    panes.show_code(&solution_path, &read_or_placeholder(&solution_path));
    Ok(())
}

/// Shows the first manifest-listed test file. Routed to the result pane,
/// like other read-only companion content.
pub fn show_tests(session: &Session, cache: &ExerciseCache, panes: &mut dyn Panes) -> Result<()> {
    let _guard = session.begin_workflow("show tests")?;
    let dir = current_exercise_dir(session, cache)?;
    let ctx = session.require_exercise()?;
    let test_file = ctx.manifest.first_test_file()?;
    panes.show_result(&read_or_placeholder(&dir.join(test_file)));
    Ok(())
}

/// Runs the tool's `test` in the exercise directory and routes its output
/// to the result pane. Tool failures propagate; nothing is shown for them
/// here.
pub fn run_tests(session: &Session, cache: &ExerciseCache, panes: &mut dyn Panes) -> Result<()> {
    let _guard = session.begin_workflow("test")?;
    let dir = current_exercise_dir(session, cache)?;
    let output = cache.runner().test(&dir)?;
    panes.show_result(&output);
    Ok(())
}

/// Runs the tool's `submit` in the exercise directory.
pub fn submit(session: &Session, cache: &ExerciseCache, panes: &mut dyn Panes) -> Result<()> {
    let _guard = session.begin_workflow("submit")?;
    let dir = current_exercise_dir(session, cache)?;
    let output = cache.runner().submit(&dir)?;
    panes.show_result(&output);
    Ok(())
}

fn read_or_placeholder(path: &std::path::Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| format!("({} not found)", path.display()))
}
