//! Unauthenticated catalog reads: tracks and per-track exercises.

use super::types::{ExercisesResponse, TracksResponse};
use super::*;
use crate::model::ExerciseInfo;

impl RemoteClient {
    /// Track slugs in server-provided order.
    pub fn list_tracks(&self) -> Result<Vec<String>> {
        with_retries("list tracks", || {
            let resp = self.send("list tracks", self.http.get(self.url("/tracks")))?;
            let parsed: TracksResponse = resp
                .json()
                .map_err(|err| Error::Transport(format!("parse tracks response: {err}")))?;
            Ok(parsed.tracks.into_iter().map(|t| t.slug).collect())
        })
    }

    /// Exercises for a track, each paired with a display label left-padded
    /// to the longest slug in this response. Padding width is recomputed per
    /// call, never cached.
    pub fn list_exercises(&self, track: &str) -> Result<Vec<(String, ExerciseInfo)>> {
        let exercises = with_retries("list exercises", || {
            let resp = self.send(
                "list exercises",
                self.http.get(self.url(&format!("/tracks/{track}/exercises"))),
            )?;
            let parsed: ExercisesResponse = resp
                .json()
                .map_err(|err| Error::Transport(format!("parse exercises response: {err}")))?;
            Ok(parsed.exercises)
        })?;
        Ok(pad_labels(exercises))
    }
}

fn pad_labels(exercises: Vec<ExerciseInfo>) -> Vec<(String, ExerciseInfo)> {
    let width = exercises.iter().map(|e| e.slug.len()).max().unwrap_or(0);
    exercises
        .into_iter()
        .map(|e| (format!("{:>width$}", e.slug), e))
        .collect()
}
