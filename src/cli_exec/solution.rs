use praxis::actions::{self, SolutionAction};
use praxis::flows;

use super::selection::gated_ctx;
use super::*;

pub(super) fn handle_test_command(exercise: Option<String>) -> Result<()> {
    let ctx = gated_ctx(exercise)?;
    flows::run_tests(&ctx.session, &ctx.cache, &mut StdoutPanes)?;
    Ok(())
}

pub(super) fn handle_submit_command(exercise: Option<String>) -> Result<()> {
    let ctx = gated_ctx(exercise)?;
    flows::submit(&ctx.session, &ctx.cache, &mut StdoutPanes)?;
    Ok(())
}

pub(super) fn handle_solution_action(
    action: SolutionAction,
    exercise: Option<String>,
) -> Result<()> {
    let ctx = gated_ctx(exercise)?;
    let remote = remote_client(&ctx.settings)?;
    let message = actions::dispatch(&ctx.session, &remote, action)?;
    println!("{message}");
    Ok(())
}
