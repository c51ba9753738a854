//! Session state: the current track and exercise context that gates every
//! higher-level action.
//!
//! The state is an owned struct passed explicitly to orchestration calls,
//! never process-global. Metadata and manifest live inside one
//! [`ExerciseContext`] option, so the pairing invariant (both present or
//! both absent) holds structurally; there is no way to update one without
//! the other.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::model::{ExerciseManifest, ExerciseMetadata};
use crate::store::ClientStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseContext {
    pub metadata: ExerciseMetadata,
    pub manifest: ExerciseManifest,
}

pub struct Session {
    store: ClientStore,
    workspace_root: PathBuf,
    track: Option<String>,
    exercise: Option<ExerciseContext>,
    busy: Rc<Cell<bool>>,
}

impl Session {
    /// Restores the current track from the store's state file. Exercise
    /// context never survives a restart; it is re-read from the workspace.
    pub fn load(store: ClientStore, workspace_root: impl Into<PathBuf>) -> Result<Self> {
        let track = store.read_state()?.current_track;
        Ok(Self {
            store,
            workspace_root: workspace_root.into(),
            track,
            exercise: None,
            busy: Rc::new(Cell::new(false)),
        })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn track(&self) -> Option<&str> {
        self.track.as_deref()
    }

    /// Persists the slug first; a persist failure leaves the prior track in
    /// place.
    pub fn set_track(&mut self, slug: &str) -> Result<()> {
        self.store.set_current_track(slug)?;
        self.track = Some(slug.to_string());
        Ok(())
    }

    pub fn exercise(&self) -> Option<&ExerciseContext> {
        self.exercise.as_ref()
    }

    /// Replaces both exercise fields at once; a partial update is not
    /// representable.
    pub fn set_exercise(&mut self, metadata: ExerciseMetadata, manifest: ExerciseManifest) {
        self.exercise = Some(ExerciseContext { metadata, manifest });
    }

    pub fn clear_exercise(&mut self) {
        self.exercise = None;
    }

    /// Fast path check: a fully populated session skips re-selection.
    pub fn is_ready(&self) -> bool {
        self.track.is_some() && self.exercise.is_some()
    }

    pub fn require_track(&self) -> Result<&str> {
        self.track
            .as_deref()
            .ok_or_else(|| Error::Precondition("track not set".into()))
    }

    pub fn require_exercise(&self) -> Result<&ExerciseContext> {
        self.exercise
            .as_ref()
            .ok_or_else(|| Error::Precondition("exercise not set".into()))
    }

    /// Single active-workflow guard. A second workflow started while one is
    /// in flight is rejected rather than allowed to race on the session
    /// fields; the guard releases on drop, error paths included.
    pub fn begin_workflow(&self, label: &str) -> Result<WorkflowGuard> {
        if self.busy.get() {
            return Err(Error::Precondition(format!(
                "cannot start `{label}`: another operation is still in progress"
            )));
        }
        self.busy.set(true);
        Ok(WorkflowGuard {
            busy: Rc::clone(&self.busy),
        })
    }
}

#[derive(Debug)]
pub struct WorkflowGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for WorkflowGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
