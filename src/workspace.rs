//! Local workspace cache: maps (track, exercise) to a directory under the
//! workspace root and downloads on demand via the companion tool.
//!
//! Policy: at most one download per directory. Re-selecting an exercise
//! whose directory already exists costs no network or process invocation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{ExerciseManifest, ExerciseMetadata};
use crate::session::Session;
use crate::tool::ToolRunner;

/// Hidden per-exercise directory the tool writes alongside exercise files.
pub const EXERCISE_META_DIR: &str = ".praxis";
pub const METADATA_FILE: &str = "metadata.json";
pub const MANIFEST_FILE: &str = "config.json";

pub struct ExerciseCache {
    root: PathBuf,
    runner: ToolRunner,
}

impl ExerciseCache {
    pub fn new(root: impl Into<PathBuf>, runner: ToolRunner) -> Self {
        Self {
            root: root.into(),
            runner,
        }
    }

    pub fn runner(&self) -> &ToolRunner {
        &self.runner
    }

    /// Pure path join; performs no I/O.
    pub fn exercise_dir(&self, track: &str, exercise: &str) -> PathBuf {
        self.root.join(track).join(exercise)
    }

    pub fn track_dir_exists(&self, track: &str) -> bool {
        self.root.join(track).is_dir()
    }

    /// Returns the exercise directory, downloading only when it is absent
    /// or `force` is set. The existing-directory path is the designed cache
    /// hit, not a swallowed error.
    pub fn ensure_downloaded(&self, track: &str, exercise: &str, force: bool) -> Result<PathBuf> {
        let dir = self.exercise_dir(track, exercise);
        if dir.is_dir() && !force {
            tracing::debug!(dir = %dir.display(), "exercise cache hit");
            return Ok(dir);
        }
        self.runner.download(track, exercise)?;
        Ok(dir)
    }

    /// Absent file reads as `None`; a freshly failed download may have left
    /// no metadata behind.
    pub fn read_metadata(&self, exercise_dir: &Path) -> Result<Option<ExerciseMetadata>> {
        read_json(&exercise_dir.join(EXERCISE_META_DIR).join(METADATA_FILE))
    }

    pub fn read_manifest(&self, exercise_dir: &Path) -> Result<Option<ExerciseManifest>> {
        read_json(&exercise_dir.join(EXERCISE_META_DIR).join(MANIFEST_FILE))
    }

    /// Downloads (if needed) and installs metadata + manifest into the
    /// session as one unit. On any failure the session's exercise context is
    /// cleared, so the pairing invariant holds on every exit path.
    pub fn setup_exercise(
        &self,
        session: &mut Session,
        track: &str,
        exercise: &str,
    ) -> Result<PathBuf> {
        match self.setup_inner(track, exercise) {
            Ok((dir, metadata, manifest)) => {
                session.set_exercise(metadata, manifest);
                Ok(dir)
            }
            Err(err) => {
                session.clear_exercise();
                Err(err)
            }
        }
    }

    fn setup_inner(
        &self,
        track: &str,
        exercise: &str,
    ) -> Result<(PathBuf, ExerciseMetadata, ExerciseManifest)> {
        let dir = self.ensure_downloaded(track, exercise, false)?;
        if let (Some(metadata), Some(manifest)) =
            (self.read_metadata(&dir)?, self.read_manifest(&dir)?)
        {
            return Ok((dir, metadata, manifest));
        }

        // A cached directory without its metadata/manifest pair (partially
        // deleted, or left by an interrupted download) is treated as a cache
        // miss: re-download once before giving up.
        tracing::debug!(dir = %dir.display(), "cached exercise incomplete, re-downloading");
        let dir = self.ensure_downloaded(track, exercise, true)?;
        match (self.read_metadata(&dir)?, self.read_manifest(&dir)?) {
            (Some(metadata), Some(manifest)) => Ok((dir, metadata, manifest)),
            _ => Err(Error::Config(format!(
                "{} is missing {}/{} or {}/{} after download",
                dir.display(),
                EXERCISE_META_DIR,
                METADATA_FILE,
                EXERCISE_META_DIR,
                MANIFEST_FILE
            ))),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    let value = serde_json::from_slice(&bytes)
        .map_err(|err| Error::Parse(format!("malformed {} ({err})", path.display())))?;
    Ok(Some(value))
}
