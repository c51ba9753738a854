use praxis::error::Error;
use praxis::flows;

use super::*;

pub(super) fn handle_track_command(slug: &str) -> Result<()> {
    let mut ctx = load_ctx()?;
    flows::choose_track(&mut ctx.session, &ctx.cache, slug)?;
    println!("Current track set to {slug}");
    Ok(())
}

pub(super) fn handle_exercise_command(slug: &str) -> Result<()> {
    let mut ctx = load_ctx()?;
    let dir = flows::choose_exercise(&mut ctx.session, &ctx.cache, slug)?;
    let track = ctx.session.require_track()?;
    println!("Current exercise set to {track}/{slug} ({})", dir.display());
    Ok(())
}

pub(super) fn handle_open_command(exercise: Option<String>) -> Result<()> {
    let ctx = gated_ctx(exercise)?;
    flows::open_current(&ctx.session, &ctx.cache, &mut StdoutPanes)?;
    Ok(())
}

pub(super) fn handle_show_tests_command(exercise: Option<String>) -> Result<()> {
    let ctx = gated_ctx(exercise)?;
    flows::show_tests(&ctx.session, &ctx.cache, &mut StdoutPanes)?;
    Ok(())
}

/// One-shot commands run in a fresh process and the exercise context never
/// survives restarts, so gated commands accept an explicit slug to
/// establish it. Selecting an already-downloaded exercise is a cache hit.
/// Without a slug the action's own gate reports "exercise not set".
pub(crate) fn gated_ctx(exercise: Option<String>) -> Result<AppCtx> {
    let mut ctx = load_ctx()?;
    if let Some(slug) = exercise {
        flows::choose_exercise(&mut ctx.session, &ctx.cache, &slug)?;
    } else if ctx.session.exercise().is_none() {
        return Err(Error::Precondition(
            "exercise not set (pass an exercise slug)".into(),
        )
        .into());
    }
    Ok(ctx)
}
