//! Solution status actions and their dispatch table.
//!
//! The action-to-endpoint/method/message mapping is static configuration:
//! adding an action means adding a table row, not new branching logic.

use crate::error::{Error, Result};
use crate::remote::RemoteClient;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionAction {
    Complete,
    Publish,
    Unpublish,
}

pub struct ActionSpec {
    /// Path segment under `/solutions/{id}/`.
    pub segment: &'static str,
    pub method: reqwest::Method,
    /// Past-tense verb for the success message.
    pub verb: &'static str,
}

impl SolutionAction {
    pub const ALL: [SolutionAction; 3] = [
        SolutionAction::Complete,
        SolutionAction::Publish,
        SolutionAction::Unpublish,
    ];

    pub fn spec(self) -> ActionSpec {
        match self {
            SolutionAction::Complete => ActionSpec {
                segment: "complete",
                method: reqwest::Method::PATCH,
                verb: "Completed",
            },
            SolutionAction::Publish => ActionSpec {
                segment: "publish",
                method: reqwest::Method::PATCH,
                verb: "Published",
            },
            SolutionAction::Unpublish => ActionSpec {
                segment: "unpublish",
                method: reqwest::Method::PATCH,
                verb: "Unpublished",
            },
        }
    }

    pub fn success_message(self, track: &str, exercise: &str) -> String {
        format!("{} {track}/{exercise} solution", self.spec().verb)
    }

    pub fn failure_message(self, track: &str, exercise: &str, payload: &str) -> String {
        format!(
            "Failed to {} {track}/{exercise} solution: {payload}",
            self.spec().segment
        )
    }
}

/// Applies `action` to the current exercise's solution. Gated on the session
/// exercise context being fully populated; a bare session yields a
/// precondition error with no network call.
pub fn dispatch(session: &Session, remote: &RemoteClient, action: SolutionAction) -> Result<String> {
    let ctx = session.require_exercise()?;
    let meta = &ctx.metadata;
    remote
        .set_solution_status(&meta.id, action)
        .map_err(|err| match err {
            Error::Transport(payload) => Error::Transport(action.failure_message(
                &meta.track,
                &meta.exercise,
                &payload,
            )),
            other => other,
        })?;
    Ok(action.success_message(&meta.track, &meta.exercise))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_messages_name_track_and_exercise() {
        assert_eq!(
            SolutionAction::Publish.success_message("rust", "two-fer"),
            "Published rust/two-fer solution"
        );
        assert_eq!(
            SolutionAction::Complete.success_message("python", "bob"),
            "Completed python/bob solution"
        );
        assert_eq!(
            SolutionAction::Unpublish.success_message("rust", "two-fer"),
            "Unpublished rust/two-fer solution"
        );
    }

    #[test]
    fn every_action_patches_solutions() {
        for action in SolutionAction::ALL {
            assert_eq!(action.spec().method, reqwest::Method::PATCH);
        }
    }
}
