//! DTOs for remote API responses.

use serde::Deserialize;

use crate::model::ExerciseInfo;

#[derive(Debug, Deserialize)]
pub(super) struct TracksResponse {
    pub(super) tracks: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrackEntry {
    pub(super) slug: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ExercisesResponse {
    pub(super) exercises: Vec<ExerciseInfo>,
}
